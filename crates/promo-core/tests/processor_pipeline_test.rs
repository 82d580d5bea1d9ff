use std::sync::{Arc, Mutex};

use promo_core::{
    ApplyFirstTo, BogoRatioAdjuster, Cart, CartItem, CommonRule, EvaluationContext, Package,
    PackageRule, PromoError, Rule, RuleProcessor, RuleTransform, TransformError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").with_test_writer().try_init();
}

fn cart_of(quantities: &[u32]) -> Cart {
    Cart::new(quantities.iter().copied().map(CartItem::new).collect())
}

fn bogo_rule(id: u64) -> Rule {
    Rule::Package(PackageRule {
        id,
        title: "BOGO".to_string(),
        apply_first_to: ApplyFirstTo::Cheapest,
        packages: vec![Package::exactly(1), Package::exactly(1)],
    })
}

/// Appends its name to a shared log on every call and passes the rule on.
struct Recording {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl RuleTransform for Recording {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(
        &self,
        rule: Rule,
        _ctx: &EvaluationContext,
        _cart: &Cart,
    ) -> Result<Rule, TransformError> {
        self.log.lock().unwrap().push(self.name);
        Ok(rule)
    }
}

struct Failing;

impl RuleTransform for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn apply(
        &self,
        _rule: Rule,
        _ctx: &EvaluationContext,
        _cart: &Cart,
    ) -> Result<Rule, TransformError> {
        Err(TransformError::Configuration { message: "bad ratio".to_string() })
    }
}

#[test]
fn transforms_run_in_registration_order() {
    init_tracing();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut processor = RuleProcessor::with_transforms(vec![
        Box::new(Recording { name: "first", log: Arc::clone(&log) }),
        Box::new(Recording { name: "second", log: Arc::clone(&log) }),
        Box::new(Recording { name: "third", log: Arc::clone(&log) }),
    ]);

    processor.prepare_rule(bogo_rule(1), &cart_of(&[1, 1])).unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    assert_eq!(processor.transform_count(), 3);
}

#[test]
fn passthrough_pipeline_returns_rules_unchanged_and_counts_them() {
    init_tracing();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut processor = RuleProcessor::with_transforms(vec![
        Box::new(Recording { name: "first", log: Arc::clone(&log) }),
        Box::new(Recording { name: "second", log: Arc::clone(&log) }),
    ]);

    let rules = vec![
        Rule::Common(CommonRule { id: 1, title: "Spring sale".to_string() }),
        Rule::Common(CommonRule { id: 2, title: "Clearance".to_string() }),
    ];
    let prepared = processor.prepare_rules(rules.clone(), &cart_of(&[1, 1])).unwrap();

    assert_eq!(prepared, rules);
    let stats = processor.stats();
    assert_eq!(stats.rules_prepared, 2);
    assert_eq!(stats.transforms_run, 4);
}

#[test]
fn bogo_adjuster_only_rewrites_the_bogo_package_rule() {
    init_tracing();
    let mut processor = RuleProcessor::new();
    processor.register_transform(Box::new(BogoRatioAdjuster));

    let common = Rule::Common(CommonRule { id: 1, title: "Spring sale".to_string() });
    let other_package = Rule::Package(PackageRule {
        id: 2,
        title: "Bundle of four".to_string(),
        apply_first_to: ApplyFirstTo::Cheapest,
        packages: vec![Package::exactly(2), Package::exactly(2)],
    });

    let prepared = processor
        .prepare_rules(
            vec![common.clone(), bogo_rule(3), other_package.clone()],
            &cart_of(&[1; 9]),
        )
        .unwrap();

    assert_eq!(prepared[0], common);
    assert_eq!(prepared[2], other_package);

    let Rule::Package(bogo) = &prepared[1] else { panic!("expected a package rule") };
    assert_eq!(bogo.packages[0], Package::new(4, 4));
    assert_eq!(bogo.packages[1].quantity_end, 5);
}

#[test]
fn transform_failure_carries_name_and_rule_id() {
    init_tracing();
    let mut processor = RuleProcessor::with_transforms(vec![Box::new(Failing)]);

    let err = processor.prepare_rule(bogo_rule(42), &cart_of(&[1])).unwrap_err();

    match err {
        PromoError::Transform { transform_name, rule_id, .. } => {
            assert_eq!(transform_name.as_deref(), Some("failing"));
            assert_eq!(rule_id, Some(42));
        }
        other => panic!("expected a transform error, got {other:?}"),
    }
}

#[test]
fn zero_ratio_bogo_rule_surfaces_as_transform_error() {
    init_tracing();
    let mut processor = RuleProcessor::with_transforms(vec![Box::new(BogoRatioAdjuster)]);

    let rule = Rule::Package(PackageRule {
        id: 9,
        title: "BOGO".to_string(),
        apply_first_to: ApplyFirstTo::Cheapest,
        packages: vec![Package::exactly(0), Package::exactly(0)],
    });
    let err = processor.prepare_rule(rule, &cart_of(&[1; 4])).unwrap_err();

    // The adjuster's configuration failure reaches the host wrapped with the
    // transform name and rule id, message intact.
    match err {
        PromoError::Transform { message, transform_name, rule_id } => {
            assert!(message.contains("0:0 free/paid ratio"));
            assert_eq!(transform_name.as_deref(), Some("bogo_ratio"));
            assert_eq!(rule_id, Some(9));
        }
        other => panic!("expected a transform error, got {other:?}"),
    }
}

#[test]
fn each_processor_gets_its_own_evaluation_context() {
    let first = RuleProcessor::new();
    let second = RuleProcessor::new();
    assert_ne!(first.context().evaluation_id, second.context().evaluation_id);
}
