use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use swatch_cn::prelude::*;

fn tokens() -> TokenResolver {
    TokenResolver::embedded()
}

fn notifications() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Send + Sync + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    (log, move |checked: bool| sink.lock().unwrap().push(checked))
}

#[test]
fn checkbox_without_props_toggles() {
    let (log, on_change) = notifications();
    let mut checkbox = cn::checkbox().on_change(on_change);

    assert_eq!(checkbox.visual(), CheckState::Unchecked);
    checkbox.click();
    assert_eq!(checkbox.visual(), CheckState::Checked);
    checkbox.click();
    assert_eq!(checkbox.visual(), CheckState::Unchecked);

    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn indeterminate_hides_check_mark_even_when_checked() {
    let element = cn::checkbox()
        .checked(true)
        .indeterminate(true)
        .render(&tokens());

    assert!(element.find_part("indeterminate").is_some());
    assert!(element.find_part("check-mark").is_none());

    let control = element.find_part("control").unwrap();
    assert_eq!(control.get_attr("data-state"), Some("indeterminate"));
    assert_eq!(control.get_attr("aria-checked"), Some("mixed"));
    assert_eq!(control.get_style().get("background-color"), Some("#3b82f6"));
}

#[test]
fn indeterminate_click_notifies_true_once() {
    let (log, on_change) = notifications();
    let mut checkbox = cn::checkbox().indeterminate(true).on_change(on_change);

    assert_eq!(checkbox.click(), Some(true));
    assert_eq!(checkbox.visual(), CheckState::Checked);

    let element = checkbox.render(&tokens());
    assert!(element.find_part("check-mark").is_some());
    assert!(element.find_part("indeterminate").is_none());
    assert_eq!(*log.lock().unwrap(), vec![true]);
}

#[test]
fn disabled_controls_never_notify() {
    let (log, on_change) = notifications();
    let mut checkbox = cn::checkbox().disabled(true).on_change(on_change);
    assert_eq!(checkbox.click(), None);
    assert_eq!(checkbox.visual(), CheckState::Unchecked);
    assert!(log.lock().unwrap().is_empty());

    let (log, on_change) = notifications();
    let mut radio = cn::radio("a").disabled(true).on_change(on_change);
    assert_eq!(radio.click(), None);
    assert!(!radio.is_checked());
    assert!(log.lock().unwrap().is_empty());

    let clicks = Arc::new(Mutex::new(0));
    for button in [
        cn::button("Off").disabled(true),
        cn::button("Busy").loading(true),
    ] {
        let counter = clicks.clone();
        let button = button.on_click(move || *counter.lock().unwrap() += 1);
        assert!(!button.click());
    }
    assert_eq!(*clicks.lock().unwrap(), 0);
}

#[test]
fn controlled_value_snaps_regardless_of_history() {
    let mut checkbox = cn::checkbox().checked(true);
    for _ in 0..5 {
        checkbox.click();
    }
    assert_eq!(checkbox.visual(), CheckState::Unchecked);

    checkbox.set_checked(false);
    assert_eq!(checkbox.visual(), CheckState::Unchecked);
    checkbox.set_checked(true);
    assert_eq!(checkbox.visual(), CheckState::Checked);

    // Disabled controls still follow their owner
    let mut disabled = cn::checkbox().disabled(true);
    disabled.set_checked(true);
    assert_eq!(disabled.visual(), CheckState::Checked);
}

#[test]
fn radio_group_of_three_stays_exclusive() {
    let selections = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = selections.clone();
    let mut group = cn::radio_group("letters")
        .option("a", "A")
        .option("b", "B")
        .option("c", "C")
        .selected("a")
        .on_change(move |value| sink.lock().unwrap().push(value.to_string()));

    assert!(group.click("b"));

    let visuals: Vec<CheckState> = group.radios().iter().map(RadioButton::visual).collect();
    assert_eq!(
        visuals,
        vec![
            CheckState::Unchecked,
            CheckState::Checked,
            CheckState::Unchecked
        ]
    );
    assert_eq!(*selections.lock().unwrap(), vec!["b".to_string()]);

    let element = group.render(&tokens());
    let dots = element
        .find_part("options")
        .map(|options| {
            options
                .children()
                .iter()
                .filter(|child| match child {
                    Node::Element(radio) => radio.find_part("dot").is_some(),
                    Node::Text(_) => false,
                })
                .count()
        })
        .unwrap_or_default();
    assert_eq!(dots, 1);
}

#[test]
fn missing_tokens_render_without_styles() {
    let tokens = TokenResolver::from_json_str(r##"{"colors": {"primary": {"500": "#3b82f6"}}}"##)
        .unwrap();
    let element = cn::checkbox().checked(true).render(&tokens);

    let control = element.find_part("control").unwrap();
    assert_eq!(control.get_style().get("background-color"), Some("#3b82f6"));
    // `colors.border.primary` is missing, so the border is dropped entirely
    assert!(!control.get_style().contains("border"));
    assert!(!element.get_style().contains("gap"));
    assert!(!tokens.diagnostics().is_empty());
}

#[test]
fn html_output_is_stable() {
    let html = cn::button("Save")
        .button_type(ButtonType::Submit)
        .render(&tokens())
        .to_html();

    assert!(html.starts_with(
        "<button class=\"swatch-button swatch-button--primary swatch-button--md\" type=\"submit\""
    ));
    assert!(html.ends_with(
        "<span class=\"swatch-button__content\" data-part=\"content\">Save</span></button>"
    ));
}
