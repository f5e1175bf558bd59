//! Extraction Property Tests
//!
//! Randomized directives checked against the extraction rules.

mod fixtures;

use autocomponent_compiler::annotations::component::{DEPENDENCIES, FROM_TEMPLATE, MODULES, SUPERINTERFACES};
use autocomponent_compiler::model::{AnnotationValue, InMemoryModel};
use autocomponent_compiler::{ComponentExtractor, DiagnosticsCollector, ErrorCode, ExtractorOptions};
use fixtures::*;
use proptest::prelude::*;

fn qualified_name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}\\.[A-Z][A-Za-z0-9]{0,8}"
}

/// A list entry: either a genuine class literal or a placeholder for a class
/// that has not been generated yet.
fn entry() -> impl Strategy<Value = (bool, String)> {
    (any::<bool>(), qualified_name())
}

fn entries_value(entries: &[(bool, String)]) -> AnnotationValue {
    AnnotationValue::List(
        entries
            .iter()
            .map(|(genuine, name)| if *genuine { ty(name).into() } else { unresolved(name) })
            .collect(),
    )
}

proptest! {
    #[test]
    fn omitted_target_is_the_component(name in qualified_name()) {
        let mut model = InMemoryModel::new();
        let id = class_with(&mut model, &name, vec![directive()]);

        let collector = DiagnosticsCollector::new();
        let extractor = ComponentExtractor::new(&model, &ExtractorOptions::default()).unwrap();
        let descriptor = extractor.extract(id, id, &collector.scoped(name.clone())).unwrap();

        prop_assert_eq!(descriptor.target(), &ty(&name));
        prop_assert!(collector.is_empty());
    }

    #[test]
    fn placeholders_are_dropped_one_diagnostic_each(
        entries in prop::collection::vec(entry(), 0..12),
    ) {
        let mut model = InMemoryModel::new();
        let id = class_with(
            &mut model,
            "com.example.App",
            vec![directive().with_value(MODULES, entries_value(&entries))],
        );

        let collector = DiagnosticsCollector::new();
        let extractor = ComponentExtractor::new(&model, &ExtractorOptions::default()).unwrap();
        let descriptor = extractor.extract(id, id, &collector.scoped("com.example.App")).unwrap();

        let genuine: Vec<_> = entries.iter().filter(|(g, _)| *g).map(|(_, n)| ty(n)).collect();
        let placeholders = entries.len() - genuine.len();

        prop_assert_eq!(descriptor.modules(), genuine.as_slice());
        prop_assert_eq!(collector.len(), placeholders);
        prop_assert!(collector
            .diagnostics()
            .iter()
            .all(|d| d.code == ErrorCode::InvalidTypeReference));
    }

    #[test]
    fn template_conflict_is_reported_once(
        template in qualified_name(),
        dependencies in prop::collection::vec(qualified_name(), 0..4),
        modules in prop::collection::vec(qualified_name(), 0..4),
        superinterfaces in prop::collection::vec(qualified_name(), 0..4),
    ) {
        let as_list = |names: &[String]| {
            AnnotationValue::List(names.iter().map(|n| ty(n).into()).collect())
        };

        let mut model = InMemoryModel::new();
        let id = class_with(
            &mut model,
            "com.example.App",
            vec![directive()
                .with_value(FROM_TEMPLATE, ty(&template))
                .with_value(DEPENDENCIES, as_list(&dependencies))
                .with_value(MODULES, as_list(&modules))
                .with_value(SUPERINTERFACES, as_list(&superinterfaces))],
        );

        let collector = DiagnosticsCollector::new();
        let extractor = ComponentExtractor::new(&model, &ExtractorOptions::default()).unwrap();
        let descriptor = extractor.extract(id, id, &collector.scoped("com.example.App")).unwrap();

        let configured = !(dependencies.is_empty() && modules.is_empty() && superinterfaces.is_empty());
        let conflicts = collector
            .diagnostics()
            .iter()
            .filter(|d| d.code == ErrorCode::TemplateWithConfiguration)
            .count();

        prop_assert_eq!(conflicts, usize::from(configured));
        prop_assert_eq!(descriptor.has_manual_configuration(), configured);
        let template = ty(&template);
        prop_assert_eq!(descriptor.from_template(), Some(&template));
        prop_assert_eq!(descriptor.dependencies().len(), dependencies.len());
        prop_assert_eq!(descriptor.modules().len(), modules.len());
        prop_assert_eq!(descriptor.superinterfaces().len(), superinterfaces.len());
    }

    #[test]
    fn extraction_is_repeatable(
        entries in prop::collection::vec(entry(), 0..8),
        scoped in any::<bool>(),
    ) {
        let mut model = model_with_scopes(&["a.Singleton"]);
        let mut annotations = vec![directive().with_value(DEPENDENCIES, entries_value(&entries))];
        if scoped {
            annotations.push(marker("a.Singleton"));
        }
        let id = class_with(&mut model, "com.example.App", annotations);

        let extractor = ComponentExtractor::new(&model, &ExtractorOptions::default()).unwrap();
        let first_run = DiagnosticsCollector::new();
        let second_run = DiagnosticsCollector::new();
        let first = extractor.extract(id, id, &first_run.scoped("com.example.App")).unwrap();
        let second = extractor.extract(id, id, &second_run.scoped("com.example.App")).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.is_scoped(), scoped);
        prop_assert_eq!(first_run.into_diagnostics(), second_run.into_diagnostics());
    }
}
