//! Tests for error construction, display and chaining

#[cfg(test)]
mod tests {
    use nbp_params::io::error::{
        DistributionError, EvaluatorError, PropertyError, ResolutionError, WithProperty,
        invalid_argument, invalid_parameters,
    };
    use nbp_params::table::property::{PropertyDomain, PropertyKind};
    use nbp_params::tissue::label::TissueId;
    use std::error::Error;

    // Tests distribution error messages
    // Verified by omitting the bounds from the message
    #[test]
    fn test_distribution_error_display() {
        let err = DistributionError::RejectionLimitExceeded {
            attempts: 100,
            lower: 5.0,
            upper: 6.0,
        };
        assert_eq!(
            err.to_string(),
            "No draw fell inside [5, 6] after 100 attempts"
        );

        let invalid = invalid_parameters("gaussian", &"std must be positive");
        assert_eq!(
            invalid.to_string(),
            "Invalid gaussian parameters: std must be positive"
        );
    }

    // Tests alias cycles print the visited chain
    // Verified by printing only the start tissue
    #[test]
    fn test_alias_cycle_display() {
        let err = ResolutionError::AliasCycle {
            tissue: TissueId::Tdlu,
            kind: PropertyKind::Density,
            chain: vec![TissueId::Tdlu, TissueId::Duct, TissueId::Tdlu],
        };
        assert_eq!(
            err.to_string(),
            "Alias cycle resolving density for 'tdlu': tdlu -> duct -> tdlu"
        );

        let mismatch = ResolutionError::DomainMismatch {
            kind: PropertyKind::SoundSpeed,
            table: PropertyDomain::Optical,
        };
        assert!(mismatch.to_string().contains("acoustic"));
    }

    // Tests sampling context wraps the distribution error as its source
    // Verified by dropping the source in the wrapper
    #[test]
    fn test_for_property_attaches_context() {
        let failed: Result<f64, DistributionError> =
            Err(DistributionError::UnresolvedAlias {
                target: TissueId::Fat,
            });
        let err = failed
            .for_property(TissueId::Ligament, PropertyKind::Anisotropy)
            .expect_err("error is preserved");

        assert!(err.to_string().starts_with("Sampling g for 'ligament' failed"));
        assert!(err.source().is_some());
        assert!(matches!(
            err,
            PropertyError::Sampling {
                tissue: TissueId::Ligament,
                kind: PropertyKind::Anisotropy,
                ..
            }
        ));
    }

    // Tests conversions into the main error type
    // Verified by mapping evaluator errors to invalid arguments
    #[test]
    fn test_from_conversions() {
        let from_eval: PropertyError = EvaluatorError::InvalidWavelength {
            wavelength_nm: -1.0,
        }
        .into();
        assert!(matches!(from_eval, PropertyError::Evaluator(_)));

        let from_io: PropertyError = std::io::Error::other("disk full").into();
        assert!(matches!(from_io, PropertyError::Io { .. }));
        assert!(from_io.source().is_some());

        let argument = invalid_argument("instances", &0, &"must be positive");
        assert_eq!(
            argument.to_string(),
            "Invalid argument 'instances' = '0': must be positive"
        );
        assert!(argument.source().is_none());
    }
}
