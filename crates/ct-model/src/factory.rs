//! CT type registry.

use crate::error::{ModelError, ModelResult};
use crate::params::CtParams;
use crate::tpx::TpxTransformer;
use crate::transformer::Transformer;

/// Maps a CT type identifier to a concrete transformer model.
///
/// Lookup is case-insensitive. New CT classes are added by extending the
/// registry here; callers stay unchanged since they only see the
/// `Transformer` capability set.
pub struct TransformerFactory;

impl TransformerFactory {
    /// Registered CT type identifiers, canonical spelling.
    pub const SUPPORTED_TYPES: &'static [&'static str] = &["TPX"];

    pub fn create(ct_type: &str, params: CtParams) -> ModelResult<Box<dyn Transformer>> {
        match ct_type.to_ascii_uppercase().as_str() {
            "TPX" => Ok(Box::new(TpxTransformer::new(params))),
            _ => Err(ModelError::UnsupportedType {
                ct_type: ct_type.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CtParams {
        CtParams {
            ct_ratio: 3000.0,
            r_ct: 0.5,
            r_b: 1.0,
            i_sn: 1.0,
            k_h: 1.0,
            k_ssc: 1.0,
            k_td: 1.0,
            v_sat: None,
            s: 2.0,
            a: 1.0,
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        for name in ["TPX", "tpx", "Tpx"] {
            let model = TransformerFactory::create(name, params()).unwrap();
            assert_eq!(model.saturation_voltage(), 1.5);
        }
    }

    #[test]
    fn unknown_type_names_the_offender() {
        let err = TransformerFactory::create("TPZ", params())
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedType { .. }));
        assert!(format!("{err}").contains("TPZ"));
    }
}
