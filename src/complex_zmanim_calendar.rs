use chrono::{DateTime, Duration, NaiveDate, TimeZone};

use crate::astronomical_calendar::AstronomicalCalendar;
use crate::constants::*;
use crate::geolocation::GeoLocation;
use crate::math::multiply_duration;
use crate::sun_times_calculator::{AstronomicalCalculatorTrait, SunTimesCalculator};
use crate::zmanim_calendar::ZmanimCalendar;

/// The full catalog of named zmanim opinions layered over the base
/// calendar. Everything here is one of the small number of derivation
/// shapes: a degree offset, a fixed-minute offset, a zmaniyos offset, or a
/// temporal-hour interpolation of some named day frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexZmanimCalendar<Tz: TimeZone, C: AstronomicalCalculatorTrait = SunTimesCalculator> {
    base: ZmanimCalendar<Tz, C>,
}

impl<Tz: TimeZone> ComplexZmanimCalendar<Tz, SunTimesCalculator> {
    pub fn new(date_time: DateTime<Tz>, geo_location: GeoLocation) -> Self {
        Self {
            base: ZmanimCalendar::new(date_time, geo_location),
        }
    }
}

impl ComplexZmanimCalendar<chrono::FixedOffset, SunTimesCalculator> {
    pub fn for_date(geo_location: GeoLocation, date: NaiveDate) -> Option<Self> {
        Some(Self {
            base: ZmanimCalendar::for_date(geo_location, date)?,
        })
    }
}

impl<Tz: TimeZone, C: AstronomicalCalculatorTrait> ComplexZmanimCalendar<Tz, C> {
    pub fn from_zmanim_calendar(base: ZmanimCalendar<Tz, C>) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &ZmanimCalendar<Tz, C> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ZmanimCalendar<Tz, C> {
        &mut self.base
    }

    fn astro(&self) -> &AstronomicalCalendar<Tz, C> {
        self.base.astronomical_calendar()
    }

    /// Offsets sunrise (negative hours) or sunset (positive hours) by
    /// fractions of a GRA shaah zmanis.
    fn zmanis_based_offset(&self, hours: f64) -> Option<DateTime<Tz>> {
        if hours == 0.0 {
            return None;
        }
        let shaah_zmanis = self.base.shaah_zmanis_gra()?;
        if hours > 0.0 {
            Some(self.base.elevation_adjusted_sunset()? + multiply_duration(shaah_zmanis, hours))
        } else {
            Some(self.base.elevation_adjusted_sunrise()? + multiply_duration(shaah_zmanis, hours))
        }
    }

    // ---- shaos zmaniyos for the named day frames ----

    fn frame_hour(
        &self,
        start: Option<DateTime<Tz>>,
        end: Option<DateTime<Tz>>,
    ) -> Option<Duration> {
        self.astro().temporal_hour_from_times(&start?, &end?)
    }

    pub fn shaah_zmanis_16_point_1_degrees(&self) -> Option<Duration> {
        self.frame_hour(self.alos_16_point_1_degrees(), self.tzais_16_point_1_degrees())
    }

    pub fn shaah_zmanis_18_degrees(&self) -> Option<Duration> {
        self.frame_hour(self.alos_18_degrees(), self.tzais_18_degrees())
    }

    pub fn shaah_zmanis_19_point_8_degrees(&self) -> Option<Duration> {
        self.frame_hour(self.alos_19_point_8_degrees(), self.tzais_19_point_8_degrees())
    }

    pub fn shaah_zmanis_26_degrees(&self) -> Option<Duration> {
        self.frame_hour(self.alos_26_degrees(), self.tzais_26_degrees())
    }

    pub fn shaah_zmanis_60_minutes(&self) -> Option<Duration> {
        self.frame_hour(self.alos_60(), self.tzais_60())
    }

    pub fn shaah_zmanis_72_minutes(&self) -> Option<Duration> {
        self.base.shaah_zmanis_mga()
    }

    pub fn shaah_zmanis_72_minutes_zmanis(&self) -> Option<Duration> {
        self.frame_hour(self.alos_72_zmanis(), self.tzais_72_zmanis())
    }

    pub fn shaah_zmanis_90_minutes(&self) -> Option<Duration> {
        self.frame_hour(self.alos_90(), self.tzais_90())
    }

    pub fn shaah_zmanis_90_minutes_zmanis(&self) -> Option<Duration> {
        self.frame_hour(self.alos_90_zmanis(), self.tzais_90_zmanis())
    }

    pub fn shaah_zmanis_96_minutes(&self) -> Option<Duration> {
        self.frame_hour(self.alos_96(), self.tzais_96())
    }

    pub fn shaah_zmanis_96_minutes_zmanis(&self) -> Option<Duration> {
        self.frame_hour(self.alos_96_zmanis(), self.tzais_96_zmanis())
    }

    pub fn shaah_zmanis_120_minutes(&self) -> Option<Duration> {
        self.frame_hour(self.alos_120(), self.tzais_120())
    }

    pub fn shaah_zmanis_120_minutes_zmanis(&self) -> Option<Duration> {
        self.frame_hour(self.alos_120_zmanis(), self.tzais_120_zmanis())
    }

    /// The Ateret Torah day runs from alos 72 zmaniyos to the configured
    /// minutes (default 40) after sunset.
    pub fn shaah_zmanis_ateret_torah(&self) -> Option<Duration> {
        self.frame_hour(self.alos_72_zmanis(), self.tzais_ateret_torah())
    }

    pub fn shaah_zmanis_alos_16_point_1_to_tzais_3_point_7(&self) -> Option<Duration> {
        self.frame_hour(self.alos_16_point_1_degrees(), self.tzais_geonim_3_point_7_degrees())
    }

    pub fn shaah_zmanis_alos_16_point_1_to_tzais_3_point_8(&self) -> Option<Duration> {
        self.frame_hour(self.alos_16_point_1_degrees(), self.tzais_geonim_3_point_8_degrees())
    }

    pub fn shaah_zmanis_baal_hatanya(&self) -> Option<Duration> {
        self.frame_hour(self.sunrise_baal_hatanya(), self.sunset_baal_hatanya())
    }

    // ---- alos ----

    pub fn alos_hashachar(&self) -> Option<DateTime<Tz>> {
        self.base.alos_hashachar()
    }

    pub fn alos_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_16_POINT_1)
    }

    pub fn alos_18_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_18_DEGREES)
    }

    pub fn alos_19_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_19_DEGREES)
    }

    pub fn alos_19_point_8_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_19_POINT_8)
    }

    pub fn alos_26_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_26_DEGREES)
    }

    pub fn alos_60(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunrise()? - Duration::minutes(60))
    }

    pub fn alos_72(&self) -> Option<DateTime<Tz>> {
        self.base.alos_72()
    }

    /// Dawn at a tenth of the day before sunrise.
    pub fn alos_72_zmanis(&self) -> Option<DateTime<Tz>> {
        self.zmanis_based_offset(-1.2)
    }

    pub fn alos_90(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunrise()? - Duration::minutes(90))
    }

    pub fn alos_90_zmanis(&self) -> Option<DateTime<Tz>> {
        self.zmanis_based_offset(-1.5)
    }

    pub fn alos_96(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunrise()? - Duration::minutes(96))
    }

    pub fn alos_96_zmanis(&self) -> Option<DateTime<Tz>> {
        self.zmanis_based_offset(-1.6)
    }

    pub fn alos_120(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunrise()? - Duration::minutes(120))
    }

    pub fn alos_120_zmanis(&self) -> Option<DateTime<Tz>> {
        self.zmanis_based_offset(-2.0)
    }

    /// The Baal Hatanya's alos at 16.9 degrees.
    pub fn alos_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_16_POINT_9)
    }

    // ---- misheyakir ----

    pub fn misheyakir_11_point_5_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_11_POINT_5)
    }

    pub fn misheyakir_11_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_11_DEGREES)
    }

    pub fn misheyakir_10_point_2_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_10_POINT_2)
    }

    pub fn misheyakir_9_point_5_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_9_POINT_5)
    }

    pub fn misheyakir_7_point_65_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_7_POINT_65)
    }

    // ---- netz/shkiah amiti (Baal Hatanya) ----

    /// Netz amiti: visible sunrise at 1.583 degrees, accounting for the
    /// sun's upper limb clearing the horizon of Eretz Yisrael's hills.
    fn sunrise_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.astro().sunrise_offset_by_degrees(ZENITH_1_POINT_583)
    }

    fn sunset_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_1_POINT_583)
    }

    // ---- sof zman krias shma ----

    pub fn sof_zman_shma_gra(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma_gra()
    }

    pub fn sof_zman_shma_mga(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma_mga()
    }

    pub fn sof_zman_shma_mga_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma(
            self.alos_16_point_1_degrees()?,
            self.tzais_16_point_1_degrees(),
            true,
        )
    }

    pub fn sof_zman_shma_mga_18_degrees(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_shma(self.alos_18_degrees()?, self.tzais_18_degrees(), true)
    }

    pub fn sof_zman_shma_mga_19_point_8_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma(
            self.alos_19_point_8_degrees()?,
            self.tzais_19_point_8_degrees(),
            true,
        )
    }

    pub fn sof_zman_shma_mga_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma_mga()
    }

    pub fn sof_zman_shma_mga_72_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_shma(self.alos_72_zmanis()?, self.tzais_72_zmanis(), true)
    }

    pub fn sof_zman_shma_mga_90_minutes(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma(self.alos_90()?, self.tzais_90(), true)
    }

    pub fn sof_zman_shma_mga_90_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_shma(self.alos_90_zmanis()?, self.tzais_90_zmanis(), true)
    }

    pub fn sof_zman_shma_mga_96_minutes(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma(self.alos_96()?, self.tzais_96(), true)
    }

    pub fn sof_zman_shma_mga_96_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_shma(self.alos_96_zmanis()?, self.tzais_96_zmanis(), true)
    }

    pub fn sof_zman_shma_mga_120_minutes(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma(self.alos_120()?, self.tzais_120(), true)
    }

    /// Shma by three fixed clock hours before chatzos.
    pub fn sof_zman_shma_3_hours_before_chatzos(&self) -> Option<DateTime<Tz>> {
        Some(self.base.chatzos()? - Duration::hours(3))
    }

    /// An asymmetric day of alos 16.1 degrees to sea-level sunset.
    pub fn sof_zman_shma_alos_16_point_1_to_sunset(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma(
            self.alos_16_point_1_degrees()?,
            self.astro().sea_level_sunset(),
            false,
        )
    }

    pub fn sof_zman_shma_alos_16_point_1_to_tzais_geonim_7_point_083_degrees(
        &self,
    ) -> Option<DateTime<Tz>> {
        self.base.sof_zman_shma(
            self.alos_16_point_1_degrees()?,
            self.tzais_geonim_7_point_083_degrees(),
            false,
        )
    }

    pub fn sof_zman_shma_ateret_torah(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_shma(self.alos_72_zmanis()?, self.tzais_ateret_torah(), false)
    }

    pub fn sof_zman_shma_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_shma(self.sunrise_baal_hatanya()?, self.sunset_baal_hatanya(), true)
    }

    pub fn sof_zman_shma_gra_sunrise_to_fixed_local_chatzos(&self) -> Option<DateTime<Tz>> {
        self.base.half_day_based_zman(
            self.base.elevation_adjusted_sunrise()?,
            self.fixed_local_chatzos()?,
            3.0,
        )
    }

    pub fn sof_zman_shma_mga_16_point_1_degrees_to_fixed_local_chatzos(
        &self,
    ) -> Option<DateTime<Tz>> {
        self.base
            .half_day_based_zman(self.alos_16_point_1_degrees()?, self.fixed_local_chatzos()?, 3.0)
    }

    pub fn sof_zman_shma_mga_18_degrees_to_fixed_local_chatzos(&self) -> Option<DateTime<Tz>> {
        self.base
            .half_day_based_zman(self.alos_18_degrees()?, self.fixed_local_chatzos()?, 3.0)
    }

    pub fn sof_zman_shma_mga_72_minutes_to_fixed_local_chatzos(&self) -> Option<DateTime<Tz>> {
        self.base
            .half_day_based_zman(self.alos_72()?, self.fixed_local_chatzos()?, 3.0)
    }

    pub fn sof_zman_shma_mga_90_minutes_to_fixed_local_chatzos(&self) -> Option<DateTime<Tz>> {
        self.base
            .half_day_based_zman(self.alos_90()?, self.fixed_local_chatzos()?, 3.0)
    }

    // ---- sof zman tfila ----

    pub fn sof_zman_tfila_gra(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila_gra()
    }

    pub fn sof_zman_tfila_mga(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila_mga()
    }

    pub fn sof_zman_tfila_mga_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila(
            self.alos_16_point_1_degrees()?,
            self.tzais_16_point_1_degrees(),
            true,
        )
    }

    pub fn sof_zman_tfila_mga_18_degrees(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_tfila(self.alos_18_degrees()?, self.tzais_18_degrees(), true)
    }

    pub fn sof_zman_tfila_mga_19_point_8_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila(
            self.alos_19_point_8_degrees()?,
            self.tzais_19_point_8_degrees(),
            true,
        )
    }

    pub fn sof_zman_tfila_mga_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila_mga()
    }

    pub fn sof_zman_tfila_mga_72_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_tfila(self.alos_72_zmanis()?, self.tzais_72_zmanis(), true)
    }

    pub fn sof_zman_tfila_mga_90_minutes(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila(self.alos_90()?, self.tzais_90(), true)
    }

    pub fn sof_zman_tfila_mga_90_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_tfila(self.alos_90_zmanis()?, self.tzais_90_zmanis(), true)
    }

    pub fn sof_zman_tfila_mga_96_minutes(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila(self.alos_96()?, self.tzais_96(), true)
    }

    pub fn sof_zman_tfila_mga_96_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_tfila(self.alos_96_zmanis()?, self.tzais_96_zmanis(), true)
    }

    pub fn sof_zman_tfila_mga_120_minutes(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila(self.alos_120()?, self.tzais_120(), true)
    }

    pub fn sof_zman_tfila_2_hours_before_chatzos(&self) -> Option<DateTime<Tz>> {
        Some(self.base.chatzos()? - Duration::hours(2))
    }

    pub fn sof_zman_tfila_ateret_torah(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_tfila(self.alos_72_zmanis()?, self.tzais_ateret_torah(), false)
    }

    pub fn sof_zman_tfila_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_tfila(self.sunrise_baal_hatanya()?, self.sunset_baal_hatanya(), true)
    }

    pub fn sof_zman_tfila_gra_sunrise_to_fixed_local_chatzos(&self) -> Option<DateTime<Tz>> {
        self.base.half_day_based_zman(
            self.base.elevation_adjusted_sunrise()?,
            self.fixed_local_chatzos()?,
            4.0,
        )
    }

    // ---- erev Pesach chametz deadlines ----

    /// Eating chametz ends when tfila does: four shaos zmaniyos into the
    /// GRA day.
    pub fn sof_zman_achilas_chametz_gra(&self) -> Option<DateTime<Tz>> {
        self.base.sof_zman_tfila_gra()
    }

    pub fn sof_zman_achilas_chametz_mga_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_tfila_mga_72_minutes()
    }

    pub fn sof_zman_achilas_chametz_mga_72_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_tfila_mga_72_minutes_zmanis()
    }

    pub fn sof_zman_achilas_chametz_mga_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_tfila_mga_16_point_1_degrees()
    }

    pub fn sof_zman_achilas_chametz_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_tfila_baal_hatanya()
    }

    pub fn sof_zman_biur_chametz_gra(&self) -> Option<DateTime<Tz>> {
        self.base.shaah_zmanis_based_zman(
            self.base.elevation_adjusted_sunrise()?,
            self.base.elevation_adjusted_sunset()?,
            5.0,
        )
    }

    pub fn sof_zman_biur_chametz_mga_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .shaah_zmanis_based_zman(self.alos_72()?, self.tzais_72()?, 5.0)
    }

    pub fn sof_zman_biur_chametz_mga_72_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .shaah_zmanis_based_zman(self.alos_72_zmanis()?, self.tzais_72_zmanis()?, 5.0)
    }

    pub fn sof_zman_biur_chametz_mga_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.shaah_zmanis_based_zman(
            self.alos_16_point_1_degrees()?,
            self.tzais_16_point_1_degrees()?,
            5.0,
        )
    }

    pub fn sof_zman_biur_chametz_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.base
            .shaah_zmanis_based_zman(self.sunrise_baal_hatanya()?, self.sunset_baal_hatanya()?, 5.0)
    }

    // ---- chatzos ----

    pub fn chatzos(&self) -> Option<DateTime<Tz>> {
        self.base.chatzos()
    }

    pub fn chatzos_layla(&self) -> Option<DateTime<Tz>> {
        self.base.chatzos_layla()
    }

    /// Noon on the local-mean-time clock: 12:00 shifted by the location's
    /// offset from its 15-degree timezone meridian.
    pub fn fixed_local_chatzos(&self) -> Option<DateTime<Tz>> {
        self.astro().local_mean_time(12.0)
    }

    // ---- mincha gedola ----

    pub fn mincha_gedola(&self) -> Option<DateTime<Tz>> {
        self.base.mincha_gedola()
    }

    pub fn mincha_gedola_30_minutes(&self) -> Option<DateTime<Tz>> {
        Some(self.base.chatzos()? + Duration::minutes(30))
    }

    pub fn mincha_gedola_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .mincha_gedola_from_times(self.alos_72(), self.tzais_72()?, true)
    }

    pub fn mincha_gedola_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.mincha_gedola_from_times(
            self.alos_16_point_1_degrees(),
            self.tzais_16_point_1_degrees()?,
            true,
        )
    }

    /// The later of half a (16.1 degrees to tzais 3.7) shaah zmanis past
    /// chatzos and 30 clock minutes past chatzos.
    pub fn mincha_gedola_ahavat_shalom(&self) -> Option<DateTime<Tz>> {
        let by_hour = self.base.chatzos()?
            + multiply_duration(self.shaah_zmanis_alos_16_point_1_to_tzais_3_point_7()?, 0.5);
        let by_minutes = self.mincha_gedola_30_minutes()?;
        Some(if by_minutes > by_hour { by_minutes } else { by_hour })
    }

    /// In winter a half shaah zmanis can run under 30 minutes; this takes
    /// the later of the two mincha gedola calculations.
    pub fn mincha_gedola_greater_than_30(&self) -> Option<DateTime<Tz>> {
        let by_minutes = self.mincha_gedola_30_minutes()?;
        let by_hour = self.base.mincha_gedola()?;
        Some(if by_minutes > by_hour { by_minutes } else { by_hour })
    }

    pub fn mincha_gedola_ateret_torah(&self) -> Option<DateTime<Tz>> {
        self.base
            .mincha_gedola_from_times(self.alos_72_zmanis(), self.tzais_ateret_torah()?, false)
    }

    pub fn mincha_gedola_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.base.mincha_gedola_from_times(
            self.sunrise_baal_hatanya(),
            self.sunset_baal_hatanya()?,
            true,
        )
    }

    pub fn mincha_gedola_baal_hatanya_greater_than_30(&self) -> Option<DateTime<Tz>> {
        let by_minutes = self.mincha_gedola_30_minutes()?;
        let by_hour = self.mincha_gedola_baal_hatanya()?;
        Some(if by_minutes > by_hour { by_minutes } else { by_hour })
    }

    pub fn mincha_gedola_gra_fixed_local_chatzos_30_minutes(&self) -> Option<DateTime<Tz>> {
        Some(self.fixed_local_chatzos()? + Duration::minutes(30))
    }

    // ---- samuch le mincha ketana ----

    pub fn samuch_le_mincha_ketana_gra(&self) -> Option<DateTime<Tz>> {
        self.base.samuch_le_mincha_ketana(
            self.base.elevation_adjusted_sunrise(),
            self.base.elevation_adjusted_sunset()?,
            true,
        )
    }

    pub fn samuch_le_mincha_ketana_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.samuch_le_mincha_ketana(
            self.alos_16_point_1_degrees(),
            self.tzais_16_point_1_degrees()?,
            true,
        )
    }

    pub fn samuch_le_mincha_ketana_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .samuch_le_mincha_ketana(self.alos_72(), self.tzais_72()?, true)
    }

    // ---- mincha ketana ----

    pub fn mincha_ketana(&self) -> Option<DateTime<Tz>> {
        self.base.mincha_ketana()
    }

    pub fn mincha_ketana_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.mincha_ketana_from_times(
            self.alos_16_point_1_degrees(),
            self.tzais_16_point_1_degrees()?,
            true,
        )
    }

    pub fn mincha_ketana_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .mincha_ketana_from_times(self.alos_72(), self.tzais_72()?, true)
    }

    pub fn mincha_ketana_ahavat_shalom(&self) -> Option<DateTime<Tz>> {
        let shaah_zmanis = self.shaah_zmanis_alos_16_point_1_to_tzais_3_point_8()?;
        Some(self.alos_16_point_1_degrees()? + multiply_duration(shaah_zmanis, 9.5))
    }

    pub fn mincha_ketana_ateret_torah(&self) -> Option<DateTime<Tz>> {
        self.base
            .mincha_ketana_from_times(self.alos_72_zmanis(), self.tzais_ateret_torah()?, false)
    }

    pub fn mincha_ketana_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.base.mincha_ketana_from_times(
            self.sunrise_baal_hatanya(),
            self.sunset_baal_hatanya()?,
            true,
        )
    }

    pub fn mincha_ketana_gra_fixed_local_chatzos_to_sunset(&self) -> Option<DateTime<Tz>> {
        self.base.half_day_based_zman(
            self.fixed_local_chatzos()?,
            self.base.elevation_adjusted_sunset()?,
            3.5,
        )
    }

    // ---- plag hamincha ----

    pub fn plag_hamincha(&self) -> Option<DateTime<Tz>> {
        self.base.plag_hamincha()
    }

    pub fn plag_hamincha_60_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_60(), self.tzais_60()?, true)
    }

    pub fn plag_hamincha_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_72(), self.tzais_72()?, true)
    }

    pub fn plag_hamincha_72_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_72_zmanis(), self.tzais_72_zmanis()?, true)
    }

    pub fn plag_hamincha_90_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_90(), self.tzais_90()?, true)
    }

    pub fn plag_hamincha_90_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_90_zmanis(), self.tzais_90_zmanis()?, true)
    }

    pub fn plag_hamincha_96_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_96(), self.tzais_96()?, true)
    }

    pub fn plag_hamincha_96_minutes_zmanis(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_96_zmanis(), self.tzais_96_zmanis()?, true)
    }

    pub fn plag_hamincha_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.plag_hamincha_from_times(
            self.alos_16_point_1_degrees(),
            self.tzais_16_point_1_degrees()?,
            true,
        )
    }

    pub fn plag_hamincha_18_degrees(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_18_degrees(), self.tzais_18_degrees()?, true)
    }

    pub fn plag_hamincha_19_point_8_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.plag_hamincha_from_times(
            self.alos_19_point_8_degrees(),
            self.tzais_19_point_8_degrees()?,
            true,
        )
    }

    pub fn plag_hamincha_26_degrees(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_26_degrees(), self.tzais_26_degrees()?, true)
    }

    pub fn plag_alos_to_sunset(&self) -> Option<DateTime<Tz>> {
        self.base.plag_hamincha_from_times(
            self.alos_16_point_1_degrees(),
            self.astro().sea_level_sunset()?,
            false,
        )
    }

    pub fn plag_alos_16_point_1_to_tzais_geonim_7_point_083_degrees(&self) -> Option<DateTime<Tz>> {
        self.base.plag_hamincha_from_times(
            self.alos_16_point_1_degrees(),
            self.tzais_geonim_7_point_083_degrees()?,
            false,
        )
    }

    pub fn plag_ahavat_shalom(&self) -> Option<DateTime<Tz>> {
        let shaah_zmanis = self.shaah_zmanis_alos_16_point_1_to_tzais_3_point_8()?;
        Some(self.alos_16_point_1_degrees()? + multiply_duration(shaah_zmanis, 10.75))
    }

    pub fn plag_hamincha_ateret_torah(&self) -> Option<DateTime<Tz>> {
        self.base
            .plag_hamincha_from_times(self.alos_72_zmanis(), self.tzais_ateret_torah()?, false)
    }

    pub fn plag_hamincha_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.base.plag_hamincha_from_times(
            self.sunrise_baal_hatanya(),
            self.sunset_baal_hatanya()?,
            true,
        )
    }

    pub fn plag_hamincha_gra_fixed_local_chatzos_to_sunset(&self) -> Option<DateTime<Tz>> {
        self.base.half_day_based_zman(
            self.fixed_local_chatzos()?,
            self.base.elevation_adjusted_sunset()?,
            4.75,
        )
    }

    // ---- bain hashmashos ----

    /// Rabbeinu Tam's bain hashmashos: 13.24 degrees after sunset, the
    /// depression reached 58.5 minutes after sunset around the equinox in
    /// Jerusalem.
    pub fn bain_hashmashos_rt_13_point_24_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_13_POINT_24)
    }

    pub fn bain_hashmashos_rt_58_point_5_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .minute_millis_offset(self.base.elevation_adjusted_sunset(), 58.5)
    }

    pub fn bain_hashmashos_rt_13_point_5_minutes_before_7_point_083_degrees(
        &self,
    ) -> Option<DateTime<Tz>> {
        self.base
            .minute_millis_offset(self.tzais_geonim_7_point_083_degrees(), -13.5)
    }

    /// Rabbeinu Tam's "two stars": sunset plus 5/18 of the alos 19.8
    /// degrees to sunrise gap.
    pub fn bain_hashmashos_rt_2_stars(&self) -> Option<DateTime<Tz>> {
        let alos_19_point_8 = self.alos_19_point_8_degrees()?;
        let sunrise = self.base.elevation_adjusted_sunrise()?;
        let dawn_span = sunrise - alos_19_point_8;
        Some(self.base.elevation_adjusted_sunset()? + multiply_duration(dawn_span, 5.0 / 18.0))
    }

    /// The Yereim holds bain hashmashos starts before sunset; these are
    /// the fixed-minute and degree expressions of his three quarter-mil.
    pub fn bain_hashmashos_yereim_18_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .minute_millis_offset(self.base.elevation_adjusted_sunset(), -18.0)
    }

    pub fn bain_hashmashos_yereim_3_point_05_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_MINUS_3_POINT_05)
    }

    pub fn bain_hashmashos_yereim_16_point_875_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .minute_millis_offset(self.base.elevation_adjusted_sunset(), -16.875)
    }

    pub fn bain_hashmashos_yereim_2_point_8_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_MINUS_2_POINT_8)
    }

    pub fn bain_hashmashos_yereim_13_point_5_minutes(&self) -> Option<DateTime<Tz>> {
        self.base
            .minute_millis_offset(self.base.elevation_adjusted_sunset(), -13.5)
    }

    pub fn bain_hashmashos_yereim_2_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_MINUS_2_POINT_1)
    }

    // ---- tzais ----

    pub fn tzais(&self) -> Option<DateTime<Tz>> {
        self.base.tzais()
    }

    pub fn tzais_geonim_3_point_65_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_3_POINT_65)
    }

    pub fn tzais_geonim_3_point_676_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_3_POINT_676)
    }

    pub fn tzais_geonim_3_point_7_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_3_POINT_7)
    }

    pub fn tzais_geonim_3_point_8_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_3_POINT_8)
    }

    pub fn tzais_geonim_4_point_37_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_4_POINT_37)
    }

    pub fn tzais_geonim_4_point_61_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_4_POINT_61)
    }

    pub fn tzais_geonim_4_point_8_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_4_POINT_8)
    }

    pub fn tzais_geonim_5_point_88_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_5_POINT_88)
    }

    pub fn tzais_geonim_5_point_95_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_5_POINT_95)
    }

    pub fn tzais_geonim_6_point_45_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_6_POINT_45)
    }

    pub fn tzais_geonim_7_point_083_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_7_POINT_083)
    }

    pub fn tzais_geonim_7_point_67_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_7_POINT_67)
    }

    pub fn tzais_geonim_8_point_5_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_8_POINT_5)
    }

    pub fn tzais_geonim_9_point_3_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_9_POINT_3)
    }

    pub fn tzais_geonim_9_point_75_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_9_POINT_75)
    }

    pub fn tzais_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_16_POINT_1)
    }

    pub fn tzais_18_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_18_DEGREES)
    }

    pub fn tzais_19_point_8_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_19_POINT_8)
    }

    pub fn tzais_26_degrees(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_26_DEGREES)
    }

    pub fn tzais_50(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunset()? + Duration::minutes(50))
    }

    pub fn tzais_60(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunset()? + Duration::minutes(60))
    }

    pub fn tzais_72(&self) -> Option<DateTime<Tz>> {
        self.base.tzais_72()
    }

    pub fn tzais_72_zmanis(&self) -> Option<DateTime<Tz>> {
        self.zmanis_based_offset(1.2)
    }

    pub fn tzais_90(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunset()? + Duration::minutes(90))
    }

    pub fn tzais_90_zmanis(&self) -> Option<DateTime<Tz>> {
        self.zmanis_based_offset(1.5)
    }

    pub fn tzais_96(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunset()? + Duration::minutes(96))
    }

    pub fn tzais_96_zmanis(&self) -> Option<DateTime<Tz>> {
        self.zmanis_based_offset(1.6)
    }

    pub fn tzais_120(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunset()? + Duration::minutes(120))
    }

    pub fn tzais_120_zmanis(&self) -> Option<DateTime<Tz>> {
        self.zmanis_based_offset(2.0)
    }

    /// Nightfall by the Ateret Torah's configurable minutes after sunset.
    pub fn tzais_ateret_torah(&self) -> Option<DateTime<Tz>> {
        Some(self.base.elevation_adjusted_sunset()? + self.base.ateret_torah_sunset_offset)
    }

    pub fn tzais_baal_hatanya(&self) -> Option<DateTime<Tz>> {
        self.astro().sunset_offset_by_degrees(ZENITH_6_DEGREES)
    }

    // ---- kiddush levana, gated to the 72-minute night ----

    pub fn tchilas_zman_kidush_levana_3_days(&self) -> Option<DateTime<Tz>> {
        self.base
            .tchilas_zman_kidush_levana_3_days(&self.alos_72(), &self.tzais_72())
    }

    pub fn tchilas_zman_kidush_levana_7_days(&self) -> Option<DateTime<Tz>> {
        self.base
            .tchilas_zman_kidush_levana_7_days(&self.alos_72(), &self.tzais_72())
    }

    pub fn sof_zman_kidush_levana_between_moldos(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_kidush_levana_between_moldos(&self.alos_72(), &self.tzais_72())
    }

    pub fn sof_zman_kidush_levana_15_days(&self) -> Option<DateTime<Tz>> {
        self.base
            .sof_zman_kidush_levana_15_days(&self.alos_72(), &self.tzais_72())
    }
}
