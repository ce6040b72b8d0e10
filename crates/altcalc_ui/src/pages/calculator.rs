//! Calculator page view.
//!
//! A single form: title header with theme toggle, four numeric inputs
//! with unit adornments, a Calculate button that is enabled only while
//! the form is valid, and a results panel that appears once a
//! calculation has run.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, column, container, row, space, text, text_input, toggler,
};
use iced::{Element, Length};

use altcalc_core::calc::{format_value, CorrectionResult};
use altcalc_core::inputs::Field;

use crate::app::{App, Message};
use crate::theme::{font, spacing};

/// Build the calculator view.
pub fn view(app: &App) -> Element<'_, Message> {
    let mut content = column![
        header_row(app),
        space::vertical().height(spacing::LG),
        form_section(app),
    ]
    .spacing(spacing::XS)
    .padding(spacing::XL)
    .max_width(760.0);

    if let Some(result) = &app.session.result {
        content = content
            .push(space::vertical().height(spacing::LG))
            .push(results_section(result));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Title header with the dark-mode toggle.
fn header_row(app: &App) -> Element<'_, Message> {
    row![
        text("Altimetry Calculator").size(font::HEADER),
        space::horizontal(),
        toggler(app.session.dark_mode)
            .label("Dark mode")
            .text_size(font::SM)
            .on_toggle(Message::ThemeToggled),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center)
    .into()
}

/// The four input rows and the Calculate button.
fn form_section(app: &App) -> Element<'_, Message> {
    let mut inputs = column![].spacing(spacing::MD);
    for field in Field::ALL {
        inputs = inputs.push(input_row(field, app.session.inputs.get(field)));
    }

    let calculate_button = button(text("Calculate").size(font::MD))
        .on_press_maybe(app.session.can_calculate().then_some(Message::Calculate))
        .padding(spacing::MD);

    let content = column![
        inputs,
        space::vertical().height(spacing::MD),
        row![space::horizontal(), calculate_button, space::horizontal()],
    ]
    .spacing(spacing::XS);

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

/// Single input row with label, text input, and unit suffix.
fn input_row(field: Field, value: &str) -> Element<'_, Message> {
    row![
        text(field.label())
            .size(font::NORMAL)
            .width(Length::Fixed(180.0)),
        text_input("", value)
            .on_input(move |v| Message::FieldEdited(field, v))
            .width(Length::Fill)
            .size(font::NORMAL),
        text(field.unit().unwrap_or(""))
            .size(font::SM)
            .width(Length::Fixed(40.0)),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center)
    .into()
}

/// Results panel with the five computed values and a Reset button.
fn results_section(result: &CorrectionResult) -> Element<'static, Message> {
    let header = text("Results").size(font::MD);

    // Rounding happens here, at the display boundary; the session keeps
    // the full-precision result.
    let rounded = result.rounded();

    let errors = column![
        result_line("ISA Temperature", rounded.isa_temperature_c, "°C", false),
        result_line("Pressure Error", rounded.pressure_error_ft, "ft", false),
        result_line("Temperature Error", rounded.temperature_error_ft, "ft", false),
    ]
    .spacing(spacing::XS);

    let totals = column![
        result_line("Combined Error", rounded.combined_error_ft, "ft", true),
        result_line("True Altitude", rounded.true_altitude_ft, "ft", true),
    ]
    .spacing(spacing::XS);

    let reset_button = button(text("Reset").size(font::NORMAL))
        .on_press(Message::Reset)
        .width(Length::Fill)
        .padding(spacing::SM);

    let content = column![
        header,
        space::vertical().height(spacing::SM),
        row![errors, totals].spacing(spacing::XL),
        space::vertical().height(spacing::MD),
        reset_button,
    ]
    .spacing(spacing::XS);

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// One labeled result value with its unit.
fn result_line(label: &str, value: f64, unit: &str, emphasized: bool) -> Element<'static, Message> {
    let size = if emphasized { font::MD } else { font::NORMAL };

    text(format!("{}: {} {}", label, format_value(value), unit))
        .size(size)
        .into()
}
