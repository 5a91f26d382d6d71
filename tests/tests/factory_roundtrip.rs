//! Seeding new builders from built contexts.

use trellis_tests::prelude::*;

mod parameter_roundtrip {
    use super::*;

    #[test]
    fn test_roundtrip_preserves_every_parameter() {
        // GIVEN a context with every durable parameter set explicitly
        let mut builder = ContextBuilder::new();
        builder
            .init_graph(sprinkler_skeleton())
            .included_edges(Some(edge("rain", "wet")))
            .unwrap()
            .excluded_edges(Some(edge("cloudy", "wet")))
            .unwrap()
            .observed_variables(sprinkler_columns())
            .unwrap()
            .latent_variables(vars!["soil"])
            .unwrap();
        let source = builder.build().unwrap();

        // WHEN a seeded builder rebuilds without further changes
        let rebuilt = make_context(Some(&source)).unwrap().build().unwrap();

        // THEN the rebuilt context matches the source parameter by
        // parameter
        assert_eq!(rebuilt.init_graph(), source.init_graph());
        assert_eq!(rebuilt.included_edges(), source.included_edges());
        assert_eq!(rebuilt.excluded_edges(), source.excluded_edges());
        assert_eq!(rebuilt.observed_variables(), source.observed_variables());
        assert_eq!(rebuilt.latent_variables(), source.latent_variables());
    }

    #[test]
    fn test_roundtrip_of_interpolated_defaults() {
        // GIVEN a context built from nothing but an observed set, so
        // every other parameter is an interpolated default
        let mut builder = ContextBuilder::new();
        builder.observed_variables(vars!["x", "y", "z"]).unwrap();
        let source = builder.build().unwrap();

        // WHEN a seeded builder rebuilds
        let rebuilt = make_context(Some(&source)).unwrap().build().unwrap();

        // THEN the defaults replay exactly: same complete graph, same
        // edgeless constraint sets, same empty latent set
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_seeded_builder_accepts_adjustments() {
        // GIVEN a context and a builder seeded from it
        let mut builder = ContextBuilder::new();
        builder.observed_variables(sprinkler_columns()).unwrap();
        let source = builder.build().unwrap();

        let mut seeded = make_context(Some(&source)).unwrap();

        // WHEN the seeded builder narrows the initial hypothesis
        seeded.init_graph(sprinkler_skeleton());
        let adjusted = seeded.build().unwrap();

        // THEN the adjustment took effect and the rest still matches
        assert_eq!(adjusted.init_graph(), &sprinkler_skeleton());
        assert_eq!(adjusted.observed_variables(), source.observed_variables());
        assert_eq!(source.init_graph().edge_count(), 6);
    }
}

mod state_scrubbing {
    use super::*;

    #[test]
    fn test_state_never_copied_into_seeded_builder() {
        // GIVEN a context whose pipeline stage left state behind
        let mut builder = ContextBuilder::new();
        builder.observed_variables(sprinkler_columns()).unwrap();
        builder.state_variable("depth", 3i64);
        builder.state_variable("skeleton", sprinkler_skeleton());
        let source = builder.build().unwrap();

        // WHEN a new builder is seeded from it
        let rebuilt = make_context(Some(&source)).unwrap().build().unwrap();

        // THEN the new context starts with an empty state bag, while
        // the source keeps its own
        assert!(rebuilt.state_variables().is_empty());
        assert_eq!(source.state_variables().len(), 2);
    }
}

mod conflict_resurfacing {
    use super::*;

    #[test]
    fn test_edge_conflict_planted_by_bypass_is_reported() {
        // GIVEN a context whose edge sets share (rain, wet), planted
        // through the check-free combined setter
        let mut builder = ContextBuilder::new();
        builder.observed_variables(sprinkler_columns()).unwrap();
        builder.edges(Some(edge("rain", "wet")), Some(edge("rain", "wet")));
        let source = builder.build().unwrap();

        // WHEN the factory replays its parameters
        let result = make_context(Some(&source));

        // THEN the hidden conflict is finally rejected
        assert!(matches!(
            result,
            Err(ConflictError::EdgeAlreadyIncluded(_, _))
        ));
    }
}
