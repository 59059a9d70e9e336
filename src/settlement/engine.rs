use super::{
    consolidation_coefficient, void_ratio, volume_compressibility, Compression, ConsolidationCondition,
    ConsolidationTime, ConsolidationTimes, LayerSettlement, LayerTimeSettlement, LoadConfig, SettlementOptions,
    SettlementResult, TimePoint, TimeSettlement, TimeSettlementCurve,
};
use crate::base::{logspace, CptError, CURVE_T_MIN, VOID_RATIO_RATE};
use crate::correlations::LayerParameters;
use crate::cpt::StressModel;
use tracing::{debug, warn};

/// Computes the settlement of a rectangular footing over a layered soil profile
///
/// The engine holds only immutable input data; all methods are pure and may be
/// called concurrently.
///
/// # Notes
///
/// * The stress increase follows the 2:1 load-spread method (see [LoadConfig::stress_increase])
/// * The immediate settlement is `Δσ H (1-ν²) / E`
/// * Only clay-like layers (Ic ≥ 2.6) consolidate; their initial effective stress is
///   computed at mid-depth with the unit weight of the options and the water table of the load
/// * The consolidation is one-dimensional with double drainage
/// * The final consolidation uses the void ratio of the Ic bands whereas the rate of
///   consolidation (mv, cv) uses the fixed void ratio [VOID_RATIO_RATE]
/// * The secondary compression starts after 90% of the primary consolidation
#[derive(Clone, Copy, Debug)]
pub struct SettlementEngine {
    load: LoadConfig,
    options: SettlementOptions,
}

impl SettlementEngine {
    /// Allocates a new instance
    pub fn new(load: LoadConfig, options: SettlementOptions) -> Result<Self, CptError> {
        load.validate()?;
        options.validate()?;
        Ok(SettlementEngine { load, options })
    }

    /// Returns the footing load
    pub fn load(&self) -> &LoadConfig {
        &self.load
    }

    /// Returns the options
    pub fn options(&self) -> &SettlementOptions {
        &self.options
    }

    /// Calculates the final settlement of one layer
    pub fn layer_settlement(&self, params: &LayerParameters) -> LayerSettlement {
        let thickness = params.thickness;
        let mid_depth = params.mid_depth();
        let stress_increase = self.load.stress_increase(mid_depth - self.load.depth, thickness);
        let nu = self.options.poisson;
        let immediate = stress_increase * thickness * (1.0 - nu * nu) / params.youngs_modulus * 1000.0;
        let e0 = void_ratio(params.ic);

        let mut result = LayerSettlement {
            layer_number: params.layer_number,
            soil_type: params.soil_type,
            top_depth: params.top_depth,
            bottom_depth: params.bottom_depth,
            thickness,
            stress_increase,
            youngs_modulus: params.youngs_modulus,
            immediate,
            condition: ConsolidationCondition::Granular,
            consolidation: 0.0,
            initial_stress: 0.0,
            preconsolidation_stress: 0.0,
            void_ratio: e0,
            compression_index: params.compression_index,
            recompression_index: params.recompression_index,
            ocr: params.ocr,
            permeability: params.permeability,
            cv: 0.0,
        };
        if !params.is_clay_like() {
            return result;
        }

        let stress = StressModel::new(self.options.gamma_soil, self.load.water_table_depth);
        let sigma_ini = stress.calc(mid_depth).sigma_vo_prime;
        let sigma_pre = sigma_ini * params.ocr;
        let (consolidation, condition) = Compression {
            cc: params.compression_index,
            cr: params.recompression_index,
            e0,
            thickness,
            sigma_ini,
            delta_sigma: stress_increase,
            sigma_pre,
        }
        .settlement();
        let mv = volume_compressibility(params.compression_index, VOID_RATIO_RATE, sigma_ini);
        result.condition = condition;
        result.consolidation = consolidation;
        result.initial_stress = sigma_ini;
        result.preconsolidation_stress = sigma_pre;
        result.cv = consolidation_coefficient(params.permeability, mv);
        result
    }

    /// Calculates the final (immediate plus primary consolidation) settlement
    pub fn calculate(&self, params: &[LayerParameters]) -> SettlementResult {
        let layers: Vec<_> = params.iter().map(|p| self.layer_settlement(p)).collect();
        let result = SettlementResult::new(self.load, layers);
        debug!(
            n_layer = result.layers.len(),
            immediate = result.immediate,
            consolidation = result.consolidation,
            "calculated settlement"
        );
        result
    }

    /// Calculates the settlement reached at a given time (years)
    pub fn settlement_at_time(&self, params: &[LayerParameters], time_years: f64) -> Result<TimeSettlement, CptError> {
        if !time_years.is_finite() || time_years < 0.0 {
            return Err(CptError::InputValidation("time must be ≥ 0.0"));
        }
        let result = self.calculate(params);
        warn_instant_clay_layers(&result.layers);
        let layers: Vec<_> = result
            .layers
            .iter()
            .map(|layer| {
                let degree = layer.degree(time_years);
                LayerTimeSettlement {
                    layer_number: layer.layer_number,
                    time_factor: if layer.consolidates() {
                        Some(layer.time_factor(time_years))
                    } else {
                        None
                    },
                    degree,
                    consolidation: layer.consolidation * degree,
                }
            })
            .collect();
        let consolidation: f64 = layers.iter().map(|l| l.consolidation).sum();
        Ok(TimeSettlement {
            time_years,
            layers,
            consolidation,
            total: result.immediate + consolidation,
        })
    }

    /// Generates the time-settlement curve
    ///
    /// The times are log-spaced from 0.001 years to `max_time_years` of the options.
    pub fn time_curve(&self, params: &[LayerParameters]) -> TimeSettlementCurve {
        let result = self.calculate(params);
        warn_instant_clay_layers(&result.layers);
        let times = logspace(CURVE_T_MIN, self.options.max_time_years, self.options.num_time_points);
        let mut layer_contributions = vec![Vec::with_capacity(times.len()); result.layers.len()];
        let points: Vec<_> = times
            .iter()
            .map(|&t| {
                let mut primary = 0.0;
                for (layer, contributions) in result.layers.iter().zip(layer_contributions.iter_mut()) {
                    let value = layer.primary_at(t);
                    contributions.push(value);
                    primary += value;
                }
                let secondary: f64 = match self.options.secondary {
                    Some(ratio) => result.layers.iter().map(|l| l.secondary_at(ratio, t)).sum(),
                    None => 0.0,
                };
                TimePoint {
                    time_years: t,
                    primary,
                    total: primary + secondary,
                }
            })
            .collect();
        debug!(n_point = times.len(), "generated time-settlement curve");
        TimeSettlementCurve {
            points,
            layer_contributions,
            immediate: result.immediate,
            final_consolidation: result.consolidation,
            secondary: self.options.secondary,
        }
    }

    /// Calculates the time for each layer to reach a degree of consolidation
    ///
    /// Granular layers report zero time.
    pub fn consolidation_times(
        &self,
        params: &[LayerParameters],
        target_degree: f64,
    ) -> Result<ConsolidationTimes, CptError> {
        let result = self.calculate(params);
        let mut layers = Vec::with_capacity(result.layers.len());
        for layer in &result.layers {
            let time_years = layer.time_for_degree(target_degree)?;
            layers.push(ConsolidationTime {
                layer_number: layer.layer_number,
                soil_type: layer.soil_type,
                thickness: layer.thickness,
                permeability: layer.permeability,
                cv: if layer.condition == ConsolidationCondition::Granular {
                    None
                } else {
                    Some(layer.cv)
                },
                time_years,
                time_days: time_years * 365.25,
            });
        }
        Ok(ConsolidationTimes { target_degree, layers })
    }
}

/// Reports clay layers that cannot consolidate in time (zero thickness)
fn warn_instant_clay_layers(layers: &[LayerSettlement]) {
    for layer in layers {
        if layer.condition != ConsolidationCondition::Granular && !layer.consolidates() {
            warn!(
                layer = layer.layer_number,
                thickness = layer.thickness,
                "skipping clay layer in time analysis"
            );
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SettlementEngine;
    use crate::base::{CptError, GAMMA_WATER, SECONDS_PER_YEAR};
    use crate::classification::SbtZone;
    use crate::correlations::LayerParameters;
    use crate::layering::Layer;
    use crate::settlement::{ConsolidationCondition, LoadConfig, SettlementOptions};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn layer(number: usize, top: f64, bottom: f64, qt: f64, ic: f64, qtn: f64) -> Layer {
        let mid = (top + bottom) / 2.0;
        let sigma_vo = 18.0 * mid;
        let sigma_vo_prime = sigma_vo - 9.81 * f64::max(0.0, mid - 2.0);
        Layer {
            layer_number: number,
            top_depth: top,
            bottom_depth: bottom,
            thickness: bottom - top,
            qc: qt,
            qt,
            fs: 0.02 * qt,
            ic,
            qt1: (qt - sigma_vo) / sigma_vo_prime,
            qtn,
            fr: 2.0,
            rf: 2.0,
            sigma_vo,
            sigma_vo_prime,
            soil_type: SbtZone::from_ic(ic),
        }
    }

    fn profile() -> Vec<LayerParameters> {
        let layers = [
            layer(1, 0.0, 2.0, 8000.0, 1.7, 120.0),
            layer(2, 2.0, 6.0, 600.0, 3.2, 4.0),
            layer(3, 6.0, 9.0, 12000.0, 1.6, 150.0),
            layer(4, 9.0, 13.0, 1200.0, 3.0, 6.0),
        ];
        LayerParameters::derive_all(&layers)
    }

    #[test]
    fn new_captures_errors() {
        let load = LoadConfig {
            width: 0.0,
            ..LoadConfig::default()
        };
        assert_eq!(
            SettlementEngine::new(load, SettlementOptions::new())
                .err()
                .unwrap()
                .validation_message(),
            Some("width must be > 0.0")
        );
        let options = SettlementOptions {
            num_time_points: 0,
            ..SettlementOptions::default()
        };
        assert_eq!(
            SettlementEngine::new(LoadConfig::default(), options)
                .err()
                .unwrap()
                .validation_message(),
            Some("num_time_points must be ≥ 2")
        );
    }

    #[test]
    fn sand_layer_has_immediate_settlement_only() -> Result<(), CptError> {
        let sand = Layer {
            qt1: 123.75,
            qtn: 50.0,
            sigma_vo: 50.0,
            sigma_vo_prime: 40.0,
            ..layer(1, 2.0, 4.0, 5000.0, 1.8, 50.0)
        };
        let params = LayerParameters::derive(&sand);
        assert!(params.ocr <= 20.0);
        assert!(params.friction_angle >= 25.0 && params.friction_angle <= 45.0);

        let load = LoadConfig::new(400.0, 2.0, 2.0, 1.0, 2.0)?;
        let engine = SettlementEngine::new(load, SettlementOptions::new())?;
        let result = engine.calculate(&[params]);
        let s = &result.layers[0];
        assert_eq!(s.condition, ConsolidationCondition::Granular);
        assert_eq!(s.consolidation, 0.0);
        assert_eq!(result.consolidation, 0.0);

        let stress = (400.0 / 9.0 + 400.0 / 25.0) / 2.0;
        assert_abs_diff_eq!(s.stress_increase, stress, epsilon = 1e-12);
        let expected = stress * 2.0 * 0.91 / params.youngs_modulus * 1000.0;
        assert_abs_diff_eq!(s.immediate, expected, epsilon = 1e-9);
        assert!(result.immediate > 0.0);
        assert_eq!(result.total, result.immediate);
        Ok(())
    }

    #[test]
    fn layers_above_the_footing_base_receive_no_stress() -> Result<(), CptError> {
        let load = LoadConfig::new(1000.0, 2.0, 2.0, 2.0, 2.0)?;
        let engine = SettlementEngine::new(load, SettlementOptions::new())?;
        let result = engine.calculate(&profile());
        assert_eq!(result.layers[0].stress_increase, 0.0); // 0 to 2 m: top above footing base
        assert_eq!(result.layers[0].immediate, 0.0);
        assert_eq!(result.layers[1].stress_increase, 0.0); // 2 to 6 m: top at footing base
        assert!(result.layers[2].stress_increase > 0.0);
        assert!(result.layers[3].stress_increase > 0.0);
        assert!(result.layers[3].stress_increase < result.layers[2].stress_increase);
        Ok(())
    }

    #[test]
    fn clay_layer_consolidates() -> Result<(), CptError> {
        let load = LoadConfig::new(2000.0, 3.0, 3.0, 1.0, 2.0)?;
        let engine = SettlementEngine::new(load, SettlementOptions::new())?;
        let params = profile();
        let result = engine.calculate(&params);

        let clay = &result.layers[1];
        assert_ne!(clay.condition, ConsolidationCondition::Granular);
        assert!(clay.consolidation > 0.0);
        // mid-depth 4 m: σ'v0 = 18·4 - 9.81·2
        assert_abs_diff_eq!(clay.initial_stress, 72.0 - 19.62, epsilon = 1e-12);
        assert_abs_diff_eq!(clay.preconsolidation_stress, clay.initial_stress * params[1].ocr, epsilon = 1e-12);
        assert_eq!(clay.void_ratio, 0.8);
        assert!(clay.cv > 0.0);

        assert_eq!(result.layers[0].condition, ConsolidationCondition::Granular);
        assert_eq!(result.layers[2].condition, ConsolidationCondition::Granular);
        assert_abs_diff_eq!(
            result.consolidation,
            result.layers[1].consolidation + result.layers[3].consolidation,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(result.total, result.immediate + result.consolidation, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn rate_of_consolidation_uses_fixed_void_ratio() -> Result<(), CptError> {
        let load = LoadConfig::new(2000.0, 3.0, 3.0, 1.0, 2.0)?;
        let engine = SettlementEngine::new(load, SettlementOptions::new())?;
        let params = LayerParameters::derive(&layer(1, 2.0, 6.0, 300.0, 3.6, 2.0));
        let clay = engine.layer_settlement(&params);
        assert_eq!(clay.void_ratio, 1.0);
        let sigma_ini = 72.0 - 19.62;
        let mv = params.compression_index / ((1.0 + 0.8) * sigma_ini * f64::ln(10.0));
        assert_relative_eq!(clay.cv, params.permeability / (GAMMA_WATER * mv), max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn settlements_are_non_negative() -> Result<(), CptError> {
        let params = profile();
        for load in [1.0, 100.0, 1000.0, 10000.0] {
            for width in [0.5, 2.0, 10.0] {
                for depth in [0.0, 1.0, 3.0, 10.0] {
                    for wt in [0.0, 2.0, 20.0] {
                        let config = LoadConfig::new(load, width, 1.5 * width, depth, wt)?;
                        let engine = SettlementEngine::new(config, SettlementOptions::new())?;
                        let result = engine.calculate(&params);
                        for layer in &result.layers {
                            assert!(layer.immediate >= 0.0);
                            assert!(layer.consolidation >= 0.0);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn settlement_at_time_works() -> Result<(), CptError> {
        let load = LoadConfig::new(2000.0, 3.0, 3.0, 1.0, 2.0)?;
        let engine = SettlementEngine::new(load, SettlementOptions::new())?;
        let params = profile();
        let result = engine.calculate(&params);

        let at_zero = engine.settlement_at_time(&params, 0.0)?;
        assert_eq!(at_zero.consolidation, 0.0);
        assert_eq!(at_zero.total, result.immediate);
        assert_eq!(at_zero.layers[0].time_factor, None);
        assert_eq!(at_zero.layers[0].degree, 1.0);
        assert_eq!(at_zero.layers[1].time_factor, Some(0.0));

        let one_year = engine.settlement_at_time(&params, 1.0)?;
        let clay = &result.layers[1];
        let tv = clay.cv * SECONDS_PER_YEAR / (2.0 * 2.0);
        assert_abs_diff_eq!(one_year.layers[1].time_factor.unwrap(), tv, epsilon = 1e-12);
        assert!(one_year.consolidation <= result.consolidation);

        assert_eq!(
            engine.settlement_at_time(&params, -1.0).err().unwrap().validation_message(),
            Some("time must be ≥ 0.0")
        );
        Ok(())
    }

    #[test]
    fn time_curve_works() -> Result<(), CptError> {
        let load = LoadConfig::new(2000.0, 3.0, 3.0, 1.0, 2.0)?;
        let mut options = SettlementOptions::new();
        options.set_num_time_points(50)?.set_max_time_years(20.0)?;
        let engine = SettlementEngine::new(load, options)?;
        let params = profile();
        let curve = engine.time_curve(&params);

        assert_eq!(curve.points.len(), 50);
        assert_eq!(curve.layer_contributions.len(), 4);
        assert_eq!(curve.layer_contributions[0].len(), 50);
        assert_abs_diff_eq!(curve.points[0].time_years, 0.001, epsilon = 1e-15);
        assert_eq!(curve.points[49].time_years, 20.0);
        assert_eq!(curve.secondary, Some(0.02));
        for i in 1..curve.points.len() {
            let (a, b) = (&curve.points[i - 1], &curve.points[i]);
            assert!(b.time_years > a.time_years);
            assert!(b.primary >= a.primary);
            assert!(b.total >= b.primary);
        }
        for (k, point) in curve.points.iter().enumerate() {
            let sum: f64 = curve.layer_contributions.iter().map(|c| c[k]).sum();
            assert_abs_diff_eq!(point.primary, sum, epsilon = 1e-9);
            assert!(point.primary >= curve.immediate);
        }
        Ok(())
    }

    #[test]
    fn time_curve_approaches_final_consolidation() -> Result<(), CptError> {
        let load = LoadConfig::new(2000.0, 3.0, 3.0, 1.0, 2.0)?;
        let mut options = SettlementOptions::new();
        options.set_secondary(None)?.set_max_time_years(1e9)?;
        let engine = SettlementEngine::new(load, options)?;
        let curve = engine.time_curve(&profile());
        assert!(curve.final_consolidation > 0.0);
        let last = curve.points.last().unwrap();
        assert_abs_diff_eq!(last.primary, curve.immediate + curve.final_consolidation, epsilon = 1e-6);
        assert_eq!(last.total, last.primary);
        Ok(())
    }

    #[test]
    fn consolidation_times_work() -> Result<(), CptError> {
        let load = LoadConfig::new(2000.0, 3.0, 3.0, 1.0, 2.0)?;
        let engine = SettlementEngine::new(load, SettlementOptions::new())?;
        let params = profile();
        let times = engine.consolidation_times(&params, 0.9)?;
        assert_eq!(times.target_degree, 0.9);
        assert_eq!(times.layers.len(), 4);
        assert_eq!(times.layers[0].cv, None);
        assert_eq!(times.layers[0].time_years, 0.0);
        let clay = &times.layers[1];
        let cv = clay.cv.unwrap();
        let expected = 0.933 * 2.0 * 2.0 / cv / SECONDS_PER_YEAR;
        assert_abs_diff_eq!(clay.time_years, expected, epsilon = 1e-9 * expected);
        assert_abs_diff_eq!(clay.time_days, expected * 365.25, epsilon = 1e-9 * expected * 365.25);

        // reaching 90% takes longer than reaching 50%
        let half = engine.consolidation_times(&params, 0.5)?;
        assert!(half.layers[1].time_years < clay.time_years);

        assert_eq!(
            engine.consolidation_times(&params, 1.0).err().unwrap().validation_message(),
            Some("target degree must be in (0.0, 1.0)")
        );
        Ok(())
    }
}
