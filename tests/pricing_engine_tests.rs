/// Integration tests for the pricing engine behaviour seen by a rendering layer
use thesis_quote::pricing::{
    catalog::{self, DELIVERY_TIMES, UNIVERSITY_TYPES, WORK_TYPES},
    AcademicLevel, PricingEngine, ProjectType, Selection,
};

fn assert_price(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn engineering_master() -> PricingEngine {
    let mut engine = PricingEngine::new();
    engine.set_academic_level(AcademicLevel::Master);
    engine.set_selected_field("engineering");
    engine.set_work_type_multiplier(1.5);
    engine.set_university_multiplier(1.2);
    engine.set_time_multiplier(1.3);
    engine
}

#[test]
fn test_master_engineering_thesis() {
    let mut engine = engineering_master();
    engine.set_project_type(ProjectType::Thesis);

    assert_eq!(engine.base_price(), 18_000_000);
    assert_price(engine.thesis_price(), 42_120_000.0);
    assert_price(engine.final_price(), 42_120_000.0);
}

#[test]
fn test_master_engineering_proposal() {
    let mut engine = engineering_master();
    engine.set_project_type(ProjectType::Proposal);

    assert_price(engine.thesis_price(), 42_120_000.0);
    assert_price(engine.final_price(), 12_636_000.0);
}

#[test]
fn test_phd_without_field_is_zero() {
    let mut engine = PricingEngine::new();
    engine.set_academic_level(AcademicLevel::Phd);
    engine.set_work_type_multiplier(1.7);
    engine.set_university_multiplier(1.0);
    engine.set_time_multiplier(1.5);

    assert_eq!(engine.base_price(), 0);
    assert_eq!(engine.final_price(), 0.0);
}

#[test]
fn test_level_change_drops_field_and_price() {
    let mut engine = engineering_master();
    assert!(engine.final_price() > 0.0);

    engine.set_academic_level(AcademicLevel::Phd);

    assert!(engine.selection().field_key.is_empty());
    assert_eq!(engine.selection().work_type_multiplier, 1.5);
    assert_eq!(engine.final_price(), 0.0);
}

#[test]
fn test_level_change_always_resets_field() {
    for from in [AcademicLevel::Master, AcademicLevel::Phd] {
        for to in [AcademicLevel::Master, AcademicLevel::Phd] {
            let mut engine = PricingEngine::new();
            engine.set_academic_level(from);
            engine.set_selected_field("humanities");
            engine.set_academic_level(to);
            assert!(engine.selection().field_key.is_empty());
        }
    }
}

#[test]
fn test_foreign_keys_resolve_to_zero() {
    for level in [AcademicLevel::Master, AcademicLevel::Phd] {
        for key in ["medical", "law", "ENGINEERING", " humanities", ""] {
            if catalog::find_field(level, key).is_some() {
                continue;
            }
            let mut engine = PricingEngine::new();
            engine.set_academic_level(level);
            engine.set_selected_field(key);
            assert_eq!(engine.base_price(), 0, "{} / {:?}", level, key);
        }
    }
}

#[test]
fn test_current_fields_follow_level() {
    let mut engine = PricingEngine::new();
    let master_keys: Vec<_> = engine.current_fields().iter().map(|f| f.key).collect();
    assert_eq!(master_keys, vec!["humanities", "engineering", "medical"]);

    engine.set_academic_level(AcademicLevel::Phd);
    let phd_keys: Vec<_> = engine.current_fields().iter().map(|f| f.key).collect();
    assert_eq!(phd_keys, vec!["humanities", "engineering"]);
}

#[test]
fn test_any_single_unset_factor_zeroes_price() {
    // each bit marks one of field, work type, university, delivery as set
    for mask in 0u8..16 {
        let mut engine = PricingEngine::new();
        if mask & 1 != 0 {
            engine.set_selected_field("medical");
        }
        if mask & 2 != 0 {
            engine.set_work_type_multiplier(1.3);
        }
        if mask & 4 != 0 {
            engine.set_university_multiplier(0.9);
        }
        if mask & 8 != 0 {
            engine.set_time_multiplier(1.0);
        }

        if mask == 15 {
            assert_price(engine.final_price(), 20_000_000.0 * 1.3 * 0.9 * 1.0);
        } else {
            assert_eq!(engine.final_price(), 0.0, "mask {:04b}", mask);
        }
    }
}

#[test]
fn test_doubling_any_multiplier_doubles_price() {
    let mut engine = engineering_master();
    engine.set_project_type(ProjectType::Proposal);
    let reference = engine.final_price();

    let mut doubled = engineering_master();
    doubled.set_project_type(ProjectType::Proposal);
    doubled.set_work_type_multiplier(3.0);
    assert_price(doubled.final_price(), reference * 2.0);

    let mut doubled = engineering_master();
    doubled.set_project_type(ProjectType::Proposal);
    doubled.set_university_multiplier(2.4);
    assert_price(doubled.final_price(), reference * 2.0);

    let mut doubled = engineering_master();
    doubled.set_project_type(ProjectType::Proposal);
    doubled.set_time_multiplier(2.6);
    assert_price(doubled.final_price(), reference * 2.0);
}

#[test]
fn test_setters_commute() {
    let mut forward = PricingEngine::new();
    forward.set_selected_field("humanities");
    forward.set_work_type_multiplier(1.2);
    forward.set_university_multiplier(1.0);
    forward.set_time_multiplier(1.5);
    forward.set_project_type(ProjectType::Proposal);

    let mut backward = PricingEngine::new();
    backward.set_project_type(ProjectType::Proposal);
    backward.set_time_multiplier(1.5);
    backward.set_university_multiplier(1.0);
    backward.set_work_type_multiplier(1.2);
    backward.set_selected_field("humanities");

    assert_eq!(forward.selection(), backward.selection());
    assert_eq!(forward.quote(), backward.quote());
}

#[test]
fn test_reset_restores_defaults_and_is_idempotent() {
    let mut engine = engineering_master();
    engine.set_project_type(ProjectType::Proposal);
    engine.set_academic_level(AcademicLevel::Phd);

    engine.reset();
    assert_eq!(engine.selection(), &Selection::default());
    assert_eq!(engine.quote(), PricingEngine::new().quote());

    let after_first = engine.quote();
    engine.reset();
    assert_eq!(engine.quote(), after_first);
}

#[test]
fn test_every_catalog_combination_is_priced() {
    let mut engine = PricingEngine::new();
    for level in [AcademicLevel::Master, AcademicLevel::Phd] {
        engine.set_academic_level(level);
        for field in catalog::fields_for(level) {
            engine.set_selected_field(field.key);
            for work in WORK_TYPES {
                engine.set_work_type_multiplier(work.value);
                for university in UNIVERSITY_TYPES {
                    engine.set_university_multiplier(university.value);
                    for time in DELIVERY_TIMES {
                        engine.set_time_multiplier(time.value);
                        let expected =
                            field.value as f64 * work.value * university.value * time.value;
                        assert_price(engine.final_price(), expected);
                    }
                }
            }
        }
    }
}

#[test]
fn test_subscriber_tracks_latest_quote() {
    let mut engine = PricingEngine::new();
    let mut rx = engine.subscribe();

    engine.set_selected_field("engineering");
    engine.set_work_type_multiplier(1.5);
    engine.set_university_multiplier(1.2);
    engine.set_time_multiplier(1.3);
    engine.set_project_type(ProjectType::Proposal);

    assert!(rx.has_changed().unwrap());
    let quote = rx.borrow_and_update().clone();
    assert_price(quote.final_price, 12_636_000.0);

    // same value again does not notify
    engine.set_time_multiplier(1.3);
    assert!(!rx.has_changed().unwrap());
}
