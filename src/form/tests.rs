#[cfg(test)]
mod tests {
    use super::super::controller::*;
    use super::super::memory::MemoryView;
    use super::super::view::*;
    use crate::bmi::input::InputPolicy;
    use crate::bmi::units::UnitSystem;

    fn metric_form() -> FormController<MemoryView> {
        FormController::new(MemoryView::new(), UnitSystem::Metric, InputPolicy::Lenient)
    }

    fn imperial_form() -> FormController<MemoryView> {
        FormController::new(MemoryView::new(), UnitSystem::Imperial, InputPolicy::Lenient)
    }

    fn type_into(form: &mut FormController<MemoryView>, field: FieldId, value: &str) {
        form.handle(FormEvent::FieldChanged(field, value.to_string()));
    }

    #[test]
    fn test_starts_on_placeholder() {
        let form = metric_form();
        let view = form.view();

        assert!(view.is_visible(Panel::Welcome));
        assert!(!view.is_visible(Panel::Results));
        assert!(view.is_visible(Panel::MetricInputs));
        assert!(!view.is_visible(Panel::ImperialInputs));
        assert_eq!(
            form.snapshot(),
            FormSnapshot {
                unit: UnitSystem::Metric,
                display: DisplayState::Placeholder,
            }
        );
    }

    #[test]
    fn test_metric_example_renders() {
        let mut form = metric_form();
        type_into(&mut form, FieldId::HeightCm, "170");
        // Height alone is not enough
        assert_eq!(form.snapshot().display, DisplayState::Placeholder);
        assert!(form.view().text(OutputRegion::Bmi).is_none());

        type_into(&mut form, FieldId::WeightKg, "70");
        let view = form.view();
        assert_eq!(view.text(OutputRegion::Bmi), Some("24.2"));
        assert_eq!(
            view.text(OutputRegion::Classification),
            Some("a healthy weight")
        );
        assert_eq!(view.text(OutputRegion::RangeLow), Some("53.5kgs"));
        assert_eq!(view.text(OutputRegion::RangeHigh), Some("72.0kgs"));
        assert!(!view.is_visible(Panel::Welcome));
        assert!(view.is_visible(Panel::Results));
        assert_eq!(form.snapshot().display, DisplayState::Results);
    }

    #[test]
    fn test_imperial_example_renders() {
        let mut form = imperial_form();
        type_into(&mut form, FieldId::HeightFt, "5");
        type_into(&mut form, FieldId::HeightIn, "9");
        type_into(&mut form, FieldId::WeightSt, "11");
        type_into(&mut form, FieldId::WeightLb, "0");

        let view = form.view();
        assert_eq!(view.text(OutputRegion::Bmi), Some("22.7"));
        assert_eq!(
            view.text(OutputRegion::Classification),
            Some("a healthy weight")
        );
        assert_eq!(view.text(OutputRegion::RangeLow), Some("125.3lbs"));
        assert_eq!(view.text(OutputRegion::RangeHigh), Some("168.6lbs"));
        assert!(view.is_visible(Panel::Results));
    }

    #[test]
    fn test_imperial_renders_before_all_fields_are_filled() {
        // Empty inches and pounds read as 0
        let mut form = imperial_form();
        type_into(&mut form, FieldId::HeightFt, "6");
        assert_eq!(form.snapshot().display, DisplayState::Placeholder);

        let result = form.handle(FormEvent::FieldChanged(
            FieldId::WeightSt,
            "12".to_string(),
        ));
        assert!(result.is_some());
        assert_eq!(form.snapshot().display, DisplayState::Results);
    }

    #[test]
    fn test_zero_height_does_not_render() {
        let mut form = metric_form();
        type_into(&mut form, FieldId::HeightCm, "0");
        type_into(&mut form, FieldId::WeightKg, "70");

        assert_eq!(form.snapshot().display, DisplayState::Placeholder);
        assert!(form.view().text(OutputRegion::Bmi).is_none());
        assert!(form.view().is_visible(Panel::Welcome));
    }

    #[test]
    fn test_invalid_input_leaves_results_unchanged() {
        let mut form = metric_form();
        type_into(&mut form, FieldId::HeightCm, "170");
        type_into(&mut form, FieldId::WeightKg, "70");
        let primed = form.view().state();

        for bad in ["0", "-5", "", "abc"] {
            type_into(&mut form, FieldId::WeightKg, bad);
            assert_eq!(form.view().state(), primed, "input {:?} changed display", bad);
            assert_eq!(form.snapshot().display, DisplayState::Results);
        }
    }

    #[test]
    fn test_imperial_invalid_input_leaves_results_unchanged() {
        let mut form = imperial_form();
        type_into(&mut form, FieldId::HeightFt, "5");
        type_into(&mut form, FieldId::HeightIn, "9");
        type_into(&mut form, FieldId::WeightSt, "11");
        let primed = form.view().state();

        type_into(&mut form, FieldId::WeightSt, "0");
        assert_eq!(form.view().state(), primed);
    }

    #[test]
    fn test_switch_clears_other_group_and_resets_display() {
        let mut form = metric_form();
        type_into(&mut form, FieldId::HeightCm, "170");
        type_into(&mut form, FieldId::WeightKg, "70");
        assert_eq!(form.snapshot().display, DisplayState::Results);

        form.handle(FormEvent::UnitSelected(UnitSystem::Imperial));
        let view = form.view();
        assert_eq!(view.read(FieldId::HeightCm), "");
        assert_eq!(view.read(FieldId::WeightKg), "");
        assert!(view.is_visible(Panel::ImperialInputs));
        assert!(!view.is_visible(Panel::MetricInputs));
        assert!(view.is_visible(Panel::Welcome));
        assert!(!view.is_visible(Panel::Results));
        assert_eq!(
            form.snapshot(),
            FormSnapshot {
                unit: UnitSystem::Imperial,
                display: DisplayState::Placeholder,
            }
        );
    }

    #[test]
    fn test_switch_back_clears_imperial_fields() {
        let mut form = imperial_form();
        type_into(&mut form, FieldId::HeightFt, "5");
        type_into(&mut form, FieldId::WeightLb, "150");

        form.switch_unit_system(UnitSystem::Metric);
        for field in FieldId::group(UnitSystem::Imperial) {
            assert_eq!(form.view().read(*field), "");
        }
    }

    #[test]
    fn test_reselecting_active_system_resets_display() {
        let mut form = metric_form();
        type_into(&mut form, FieldId::HeightCm, "180");
        type_into(&mut form, FieldId::WeightKg, "90");

        form.switch_unit_system(UnitSystem::Metric);
        assert_eq!(form.snapshot().display, DisplayState::Placeholder);
        assert!(form.view().is_visible(Panel::Welcome));
        // Active group keeps its values
        assert_eq!(form.view().read(FieldId::HeightCm), "180");
    }

    #[test]
    fn test_strict_policy_rejects_garbage() {
        let mut form =
            FormController::new(MemoryView::new(), UnitSystem::Imperial, InputPolicy::Strict);
        type_into(&mut form, FieldId::HeightFt, "5");
        type_into(&mut form, FieldId::HeightIn, "nine");
        type_into(&mut form, FieldId::WeightSt, "11");
        assert_eq!(form.snapshot().display, DisplayState::Placeholder);

        type_into(&mut form, FieldId::HeightIn, "9");
        assert_eq!(form.view().text(OutputRegion::Bmi), Some("22.7"));
    }

    #[test]
    fn test_lenient_policy_reads_garbage_as_zero() {
        let mut form = imperial_form();
        type_into(&mut form, FieldId::HeightFt, "5");
        type_into(&mut form, FieldId::HeightIn, "nine");
        type_into(&mut form, FieldId::WeightSt, "11");

        // 60 inches, 154 pounds
        assert_eq!(form.view().text(OutputRegion::Bmi), Some("30.1"));
        assert_eq!(form.view().text(OutputRegion::Classification), Some("obese"));
    }
}
