#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

use common::feedback::{Feedback, FormView, Notice};
use common::stepper::Stepper;
use frontend::dom::feedback::MessageSurface;
use frontend::dom::form::{DomForm, FieldScope};
use frontend::dom::stepper::InputField;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(markup: &str) -> HtmlElement {
    let host: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    host.set_inner_html(markup);
    document().body().unwrap().append_child(&host).unwrap();
    host
}

fn first<T: JsCast>(host: &HtmlElement, selector: &str) -> T {
    host.query_selector(selector).unwrap().unwrap().unchecked_into()
}

#[wasm_bindgen_test]
fn stepper_respects_declared_max() {
    let host = mount(r#"<input id="stepAmount" type="number" value="4" max="5">"#);
    let input: HtmlInputElement = first(&host, "input");
    let stepper = Stepper::new(InputField(input.clone()));

    assert!(stepper.increment());
    assert_eq!(input.value(), "5");
    assert!(!stepper.increment());
    assert_eq!(input.value(), "5");
    host.remove();
}

#[wasm_bindgen_test]
fn stepper_treats_blank_value_as_zero() {
    let host = mount(r#"<input type="text" value="">"#);
    let input: HtmlInputElement = first(&host, "input");
    let stepper = Stepper::new(InputField(input.clone()));

    assert!(!stepper.decrement());
    assert!(stepper.handle_key("ArrowUp"));
    assert_eq!(input.value(), "1");
    assert!(!stepper.handle_key("Enter"));
    host.remove();
}

#[wasm_bindgen_test]
fn alert_box_becomes_visible_with_tone() {
    let host = mount(r#"<div class="alert" style="display: none"></div>"#);
    let region: HtmlElement = first(&host, "div");
    let surface = MessageSurface::AlertBox(region.clone());

    surface.show(&Notice::error("Erreur : user not found"));
    assert_eq!(region.text_content().unwrap(), "Erreur : user not found");
    assert_eq!(region.class_name(), "alert alert-danger");
    assert_eq!(region.style().get_property_value("display").unwrap(), "block");

    surface.show(&Notice::success("ok"));
    assert_eq!(region.class_name(), "alert alert-success");
    host.remove();
}

#[wasm_bindgen_test]
fn colored_line_replaces_previous_message() {
    let host = mount(r#"<div class="region"><p>old</p></div>"#);
    let region = host.first_element_child().unwrap();
    let surface = MessageSurface::ColoredLine(region.clone());

    surface.show(&Notice::success("OK"));
    assert_eq!(region.child_element_count(), 1);
    let line: HtmlElement = region.first_element_child().unwrap().unchecked_into();
    assert_eq!(line.text_content().unwrap(), "OK");
    assert_eq!(line.style().get_property_value("color").unwrap(), "green");
    host.remove();
}

#[wasm_bindgen_test]
fn form_fields_keep_document_order() {
    let host = mount(
        r#"<form action=" ">
            <input name="email" value="a@b.c">
            <input name="userId" value="3">
            <button type="submit">go</button>
        </form>"#,
    );
    let form: HtmlFormElement = first(&host, "form");
    let button = host.query_selector("button").unwrap();
    let view = DomForm::new(FieldScope::Form(form), button.clone());

    let fields = view.fields().unwrap();
    let names: Vec<_> = fields.iter().map(|(name, _)| name.to_string()).collect();
    assert_eq!(names, vec!["email", "userId"]);
    assert_eq!(fields.get("userId"), Some("3"));
    assert_eq!(view.action(), None);

    view.set_busy(true);
    assert!(button.as_ref().unwrap().has_attribute("disabled"));
    view.set_busy(false);
    assert!(!button.unwrap().has_attribute("disabled"));
    host.remove();
}

#[wasm_bindgen_test]
fn loose_inputs_are_keyed_by_id_and_cleared_on_reset() {
    let host = mount(r#"<input id="userName" value="ana"><input id="password" value="secret">"#);
    let inputs: Vec<HtmlInputElement> = vec![first(&host, "#userName"), first(&host, "#password")];
    let view = DomForm::new(FieldScope::Inputs(inputs.clone()), None);

    let fields = view.fields().unwrap();
    assert_eq!(fields.get("userName"), Some("ana"));
    assert_eq!(fields.get("password"), Some("secret"));

    view.reset();
    assert!(inputs.iter().all(|input| input.value().is_empty()));
    host.remove();
}
