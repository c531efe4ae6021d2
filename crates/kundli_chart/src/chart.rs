//! Chart operations over an explicit position provider.
//!
//! Every operation takes the provider as a parameter and recomputes from
//! scratch; nothing is cached between calls. An unavailable backend falls
//! back to placeholder data and is reported, never silently mixed in.

use kundli_core::{Body, FallbackProvider, GeoLocation, PositionProvider, PositionSource};
use kundli_time::{BirthMoment, TimeValue};
use kundli_vedic::dasha::{DashaOptions, snapshot_in};
use kundli_vedic::{
    DashaPeriod, VedicError, bhavas_from_cusps, dasha_tree, house_of,
    nakshatra_from_longitude, navamsa_position, panchangam, porutham, rashi_from_longitude,
    vaar_from_jd, vimshottari_forest, vimshottari_mahadashas,
};
use log::{debug, info};

use crate::chart_types::{
    BhuktiList, BhuktiView, ChartInput, ChartRequest, ChartResponse, CurrentDasha,
    CurrentDashaResponse, DashaPeriodView, DashaView, HousesView, Instant, MahadashaSequence,
    MatchResponse, MatchSubject, NavamsaPlacement, PanchangView, PlanetView, RasiPlacement,
};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::place::{PlaceResolver, PlaceTable};
use crate::snapshot::ChartSnapshot;

/// Birth instant and Moon longitude, the only inputs the dasha engine needs.
struct DashaBasis {
    time: TimeValue,
    moon_lon: f64,
    source: PositionSource,
}

impl DashaBasis {
    fn is_placeholder(&self) -> bool {
        self.source == PositionSource::Placeholder
    }
}

fn dasha_basis(
    provider: &dyn PositionProvider,
    birth: &BirthMoment,
) -> Result<DashaBasis, ChartError> {
    let time = birth.to_time_value()?;
    let (moon, source) =
        FallbackProvider::new(provider).position_with_source(time, Body::Moon)?;
    if source == PositionSource::Placeholder {
        debug!("dasha basis uses placeholder Moon longitude");
    }
    Ok(DashaBasis {
        time,
        moon_lon: moon.longitude_deg,
        source,
    })
}

fn resolve_birth(
    input: &ChartInput,
    places: &dyn PlaceResolver,
) -> Result<BirthMoment, ChartError> {
    match input {
        ChartInput::Birth(moment) => Ok(*moment),
        ChartInput::Place { place, moment } => {
            let entry = places
                .resolve(place)
                .ok_or_else(|| ChartError::PlaceNotFound(place.clone()))?;
            debug!(
                "resolved place {place:?} to ({}, {}) UTC{:+}",
                entry.latitude, entry.longitude, entry.utc_offset_hours
            );
            Ok(BirthMoment {
                latitude: entry.latitude,
                longitude: entry.longitude,
                utc_offset_hours: entry.utc_offset_hours,
                ..*moment
            })
        }
    }
}

fn current_in(
    mahadashas: &[DashaPeriod],
    query: TimeValue,
    options: &DashaOptions,
) -> Result<CurrentDasha, ChartError> {
    match snapshot_in(mahadashas, query.jd(), options) {
        Ok(snap) => {
            let mahadasha = snap
                .mahadasha()
                .map(DashaPeriodView::from_period)
                .ok_or(ChartError::request("empty dasha snapshot"))?;
            Ok(CurrentDasha::Active {
                query: query.into(),
                mahadasha,
                bhukti: snap.bhukti().map(DashaPeriodView::from_period),
                pratyantar: snap.pratyantar().map(DashaPeriodView::from_period),
            })
        }
        Err(VedicError::OutOfRange {
            query_jd,
            start_jd,
            end_jd,
        }) => {
            debug!("JD {query_jd} outside dasha horizon [{start_jd}, {end_jd})");
            Ok(CurrentDasha::OutOfRange {
                query: Instant::from_jd(query_jd),
                horizon_start: Instant::from_jd(start_jd),
                horizon_end: Instant::from_jd(end_jd),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Generate a full chart, resolving place names against `config.places`.
pub fn generate_chart(
    provider: &dyn PositionProvider,
    request: &ChartRequest,
    config: &ChartConfig,
) -> Result<ChartResponse, ChartError> {
    let places = PlaceTable::new(config.places.clone());
    generate_chart_with(provider, &places, request, config)
}

/// Generate a full chart with a caller-supplied place resolver.
pub fn generate_chart_with(
    provider: &dyn PositionProvider,
    places: &dyn PlaceResolver,
    request: &ChartRequest,
    config: &ChartConfig,
) -> Result<ChartResponse, ChartError> {
    config.validate()?;
    let birth = resolve_birth(&request.input, places)?;
    let t = birth.to_time_value()?;
    let snapshot = ChartSnapshot::compute(provider, t)?;

    let location = GeoLocation::new(birth.latitude, birth.longitude);
    let (frame, house_source) =
        FallbackProvider::new(provider).houses_with_source(t, &location)?;
    let cusps = frame.cusps_deg;

    let grahas = snapshot.grahas();
    let mut planets = Vec::with_capacity(grahas.len());
    let mut rasi = Vec::with_capacity(grahas.len());
    let mut navamsa = Vec::with_capacity(grahas.len());
    for g in grahas {
        let nak = nakshatra_from_longitude(g.longitude_deg);
        planets.push(PlanetView {
            graha: g.graha,
            longitude_deg: g.longitude_deg,
            latitude_deg: g.latitude_deg,
            distance_au: g.distance_au,
            speed_deg_per_day: g.speed_deg_per_day,
            retrograde: g.is_retrograde(),
            nakshatra: nak.nakshatra,
            pada: nak.pada,
            house: house_of(g.longitude_deg, &cusps)?,
        });

        let sign = rashi_from_longitude(g.longitude_deg);
        rasi.push(RasiPlacement {
            graha: g.graha,
            sign_index: sign.rashi_index,
            sign: sign.rashi,
            sign_name: sign.rashi.name(),
            degrees_in_sign: sign.degrees_in_rashi,
        });

        navamsa.push(NavamsaPlacement {
            graha: g.graha,
            position: navamsa_position(g.longitude_deg)?,
        });
    }

    let houses = HousesView {
        ascendant_deg: frame.ascendant_deg,
        mc_deg: frame.mc_deg,
        cusps_deg: cusps,
        lagna: rashi_from_longitude(frame.ascendant_deg).rashi,
        bhavas: bhavas_from_cusps(&cusps),
    };

    let options = config.dasha_options();
    let forest = vimshottari_forest(t.jd(), snapshot.moon_longitude(), &options)?;
    let mahadashas: Vec<DashaPeriod> = forest.iter().map(|n| n.period).collect();
    let current = request
        .as_of
        .map(|q| current_in(&mahadashas, q, &options))
        .transpose()?;
    let dasha = DashaView {
        sequence: forest.iter().map(DashaPeriodView::from_node).collect(),
        current,
    };

    // Weekday follows the local civil date, not the UT one.
    let local_jd = t.jd() + birth.utc_offset_hours / 24.0;
    let panchang = PanchangView {
        panchangam: panchangam(snapshot.sun_longitude(), snapshot.moon_longitude())?,
        vaar: vaar_from_jd(local_jd)?,
    };

    let source = snapshot.source().merge(house_source);
    info!(
        "chart at JD {:.5}: lagna {}, {} mahadashas{}",
        t.jd(),
        houses.lagna.name(),
        dasha.sequence.len(),
        if source == PositionSource::Placeholder {
            " (placeholder data)"
        } else {
            ""
        }
    );

    Ok(ChartResponse {
        birth,
        time: t.into(),
        planets,
        rasi,
        houses,
        navamsa,
        dasha,
        panchangam: panchang,
        placeholder_data: source == PositionSource::Placeholder,
    })
}

/// Mahadashas from birth, without sub-periods.
pub fn mahadasha_sequence(
    provider: &dyn PositionProvider,
    birth: &BirthMoment,
    config: &ChartConfig,
) -> Result<MahadashaSequence, ChartError> {
    config.validate()?;
    let basis = dasha_basis(provider, birth)?;
    let periods =
        vimshottari_mahadashas(basis.time.jd(), basis.moon_lon, config.dasha_span_years)?;
    Ok(MahadashaSequence {
        mahadashas: periods.iter().map(DashaPeriodView::from_period).collect(),
        placeholder_data: basis.is_placeholder(),
    })
}

/// Bhuktis of the Mahadasha at `mahadasha_index` (0-based).
///
/// With `dasha_depth == 3` each Bhukti carries its Pratyantars.
pub fn bhuktis(
    provider: &dyn PositionProvider,
    birth: &BirthMoment,
    mahadasha_index: usize,
    config: &ChartConfig,
) -> Result<BhuktiList, ChartError> {
    config.validate()?;
    let basis = dasha_basis(provider, birth)?;
    let periods =
        vimshottari_mahadashas(basis.time.jd(), basis.moon_lon, config.dasha_span_years)?;
    let parent = periods
        .get(mahadasha_index)
        .ok_or(ChartError::request("mahadasha index out of range"))?;
    let tree = dasha_tree(parent, config.dasha_depth.max(2), config.balance_subdivision);
    let bhuktis = tree
        .children
        .iter()
        .map(|node| BhuktiView {
            maha_lord: parent.lord,
            period: DashaPeriodView::from_node(node),
        })
        .collect();
    Ok(BhuktiList {
        mahadasha_index,
        bhuktis,
        placeholder_data: basis.is_placeholder(),
    })
}

/// Active dasha chain at `target`. `None` means the current system time.
pub fn current_dasha(
    provider: &dyn PositionProvider,
    birth: &BirthMoment,
    target: Option<TimeValue>,
    config: &ChartConfig,
) -> Result<CurrentDashaResponse, ChartError> {
    config.validate()?;
    let query = target.unwrap_or_else(TimeValue::now);
    let basis = dasha_basis(provider, birth)?;
    let options = config.dasha_options();
    let periods = vimshottari_mahadashas(basis.time.jd(), basis.moon_lon, options.span_years)?;
    Ok(CurrentDashaResponse {
        current: current_in(&periods, query, &options)?,
        placeholder_data: basis.is_placeholder(),
    })
}

impl MatchSubject {
    /// Moon longitude of this subject, computing positions if needed.
    pub fn moon_longitude(&self, provider: &dyn PositionProvider) -> Result<f64, ChartError> {
        self.moon_with_source(provider).map(|(lon, _)| lon)
    }

    fn moon_with_source(
        &self,
        provider: &dyn PositionProvider,
    ) -> Result<(f64, PositionSource), ChartError> {
        match self {
            Self::Snapshot(snapshot) => Ok((snapshot.moon_longitude(), snapshot.source())),
            Self::Birth(birth) => {
                let basis = dasha_basis(provider, birth)?;
                Ok((basis.moon_lon, basis.source))
            }
        }
    }
}

/// Porutham compatibility of `a` (reference) against `b`.
pub fn match_charts(
    provider: &dyn PositionProvider,
    a: &MatchSubject,
    b: &MatchSubject,
    config: &ChartConfig,
) -> Result<MatchResponse, ChartError> {
    config.validate()?;
    let (moon_a, source_a) = a.moon_with_source(provider)?;
    let (moon_b, source_b) = b.moon_with_source(provider)?;
    let result = porutham(moon_a, moon_b)?;
    debug!(
        "porutham {} / {}: {}/{}",
        result.nakshatra_a.name(),
        result.nakshatra_b.name(),
        result.score,
        result.max_score
    );
    Ok(MatchResponse {
        result,
        placeholder_data: source_a.merge(source_b) == PositionSource::Placeholder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaceEntry;
    use kundli_core::{KeplerianProvider, PlaceholderProvider};
    use kundli_vedic::DashaLevel;

    fn chennai() -> PlaceEntry {
        PlaceEntry {
            name: "Chennai".into(),
            latitude: 13.0827,
            longitude: 80.2707,
            utc_offset_hours: 5.5,
        }
    }

    fn moment() -> BirthMoment {
        BirthMoment::new(1990, 5, 15, 10, 30, 5.5).with_location(13.0827, 80.2707)
    }

    #[test]
    fn place_overrides_location() {
        let table = PlaceTable::new(vec![chennai()]);
        let input = ChartInput::Place {
            place: "chennai".into(),
            moment: BirthMoment::new(1990, 5, 15, 10, 30, 0.0),
        };
        let b = resolve_birth(&input, &table).unwrap();
        assert_eq!(b.utc_offset_hours, 5.5);
        assert_eq!(b.latitude, 13.0827);
        assert_eq!(b.hour, 10);
    }

    #[test]
    fn direct_birth_passes_through() {
        let input = ChartInput::Birth(moment());
        assert_eq!(resolve_birth(&input, &PlaceTable::default()).unwrap(), moment());
    }

    #[test]
    fn current_matches_sequence() {
        let config = ChartConfig::default();
        let seq = mahadasha_sequence(&KeplerianProvider, &moment(), &config)
            .unwrap()
            .mahadashas;
        let mid = (seq[2].start_jd + seq[2].end_jd) / 2.0;
        let cur = current_dasha(
            &KeplerianProvider,
            &moment(),
            Some(TimeValue::from_jd(mid)),
            &config,
        )
        .unwrap();
        assert!(!cur.placeholder_data);
        let CurrentDasha::Active {
            mahadasha,
            bhukti,
            pratyantar,
            ..
        } = cur.current
        else {
            panic!("expected active dasha");
        };
        assert_eq!(mahadasha.lord, seq[2].lord);
        assert_eq!(mahadasha.start_jd, seq[2].start_jd);
        assert_eq!(bhukti.map(|b| b.level), Some(DashaLevel::Bhukti));
        assert_eq!(pratyantar.map(|p| p.level), Some(DashaLevel::Pratyantar));
    }

    #[test]
    fn current_respects_depth() {
        let config = ChartConfig {
            dasha_depth: 1,
            ..ChartConfig::default()
        };
        let birth_jd = moment().to_time_value().unwrap().jd();
        let cur = current_dasha(
            &PlaceholderProvider,
            &moment(),
            Some(TimeValue::from_jd(birth_jd + 1000.0)),
            &config,
        )
        .unwrap();
        assert!(matches!(
            cur.current,
            CurrentDasha::Active {
                bhukti: None,
                pratyantar: None,
                ..
            }
        ));
    }

    #[test]
    fn bhuktis_carry_pratyantars_at_depth_three() {
        let config = ChartConfig::default();
        let b = bhuktis(&KeplerianProvider, &moment(), 1, &config).unwrap().bhuktis;
        assert_eq!(b.len(), 9);
        assert!(b.iter().all(|x| x.period.children.len() == 9));

        let shallow = ChartConfig {
            dasha_depth: 1,
            ..ChartConfig::default()
        };
        let b = bhuktis(&KeplerianProvider, &moment(), 1, &shallow).unwrap().bhuktis;
        assert_eq!(b.len(), 9);
        assert!(b.iter().all(|x| x.period.children.is_empty()));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = ChartConfig {
            dasha_depth: 0,
            ..ChartConfig::default()
        };
        let err = mahadasha_sequence(&KeplerianProvider, &moment(), &config).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }
}
