//! Forms and their controls.
//!
//! ```
//! use htmlgen::{GeneratorExt, Item};
//! use htmlgen_dom::{Division, Form, SubmitButton, TextInput};
//!
//! let mut form = Form::new("POST", "/feedback");
//! form.append(Division::with_content([
//!     Item::from("Name: "),
//!     TextInput::new("name", "").into(),
//! ]));
//! form.append(SubmitButton::new("Submit"));
//! assert_eq!(
//!     form.render(),
//!     concat!(
//!         r#"<form action="/feedback" method="POST">"#,
//!         r#"<div>Name: <input name="name" type="text"/></div>"#,
//!         r#"<input type="submit" value="Submit"/></form>"#,
//!     ),
//! );
//! ```

use std::ops::{Deref, DerefMut};

use htmlgen::{
    Attribute, BooleanAttribute, Element, Error, HtmlElement, Item, IteratorGenerator,
    ListAttribute, Shared, TextAttribute, VoidElement,
};
use time::{Date, Time};

use crate::macros::{append_shared, shared_children};
use crate::tracing_macros::debug;

/// `enctype` of a plain form.
pub const ENC_TYPE_URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// `enctype` of a form that uploads files.
pub const ENC_TYPE_MULTIPART: &str = "multipart/form-data";

htmlgen::attribute_enum! {
    /// Whether the browser may fill in values automatically.
    pub enum Autocomplete {
        /// Never fill in.
        Off = "off",
        /// Fill in from earlier input.
        On = "on",
    }
}

const NAME: TextAttribute = TextAttribute::with_default("name", "");
const READONLY: BooleanAttribute = BooleanAttribute::new("readonly");
const DISABLED: BooleanAttribute = BooleanAttribute::new("disabled");
const AUTOCOMPLETE: TextAttribute = TextAttribute::new("autocomplete");
const PLACEHOLDER: TextAttribute = TextAttribute::new("placeholder");

/// A `<form>`.
///
/// Forms that contain a [`FileInput`] need the multipart encoding:
///
/// ```
/// use htmlgen_dom::{ENC_TYPE_MULTIPART, Form};
///
/// let mut form = Form::new("POST", "/upload");
/// form.set_multipart(true);
/// assert_eq!(form.encryption_type(), ENC_TYPE_MULTIPART);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    element: Element,
}

impl Form {
    const METHOD: TextAttribute = TextAttribute::with_default("method", "GET");
    const URL: TextAttribute = TextAttribute::with_default("action", "");
    const TARGET: TextAttribute = TextAttribute::with_default("target", "_self");
    const ENC_TYPE: TextAttribute = TextAttribute::with_default("enctype", ENC_TYPE_URL_ENCODED);
    const AUTOCOMPLETE: Attribute<Autocomplete> = Attribute::new("autocomplete");

    /// Creates a form submitted with `method` to `url`.
    pub fn new(method: &str, url: &str) -> Self {
        let mut form = Self {
            element: Element::new("form"),
        };
        form.set_method(method);
        form.set_url(url);
        form
    }

    /// The HTTP method, `GET` unless set.
    pub fn method(&self) -> String {
        self.get(&Self::METHOD).unwrap_or_default()
    }

    /// Sets the HTTP method.
    pub fn set_method(&mut self, method: &str) {
        self.set(&Self::METHOD, Some(method.to_owned()));
    }

    /// The `action` URL, empty unless set.
    pub fn url(&self) -> String {
        self.get(&Self::URL).unwrap_or_default()
    }

    /// Sets the `action` URL.
    pub fn set_url(&mut self, url: &str) {
        self.set(&Self::URL, Some(url.to_owned()));
    }

    /// The browsing context the response is shown in.
    pub fn target(&self) -> String {
        self.get(&Self::TARGET).unwrap_or_default()
    }

    /// Sets the browsing context; `_self` removes the attribute.
    pub fn set_target(&mut self, target: &str) {
        self.set(&Self::TARGET, Some(target.to_owned()));
    }

    /// Shows the response in a new window or tab.
    pub fn set_blank_target(&mut self) {
        self.set_target("_blank");
    }

    /// The `enctype`.
    pub fn encryption_type(&self) -> String {
        self.get(&Self::ENC_TYPE).unwrap_or_default()
    }

    /// Sets the `enctype`.
    pub fn set_encryption_type(&mut self, encryption_type: &str) {
        self.set(&Self::ENC_TYPE, Some(encryption_type.to_owned()));
    }

    /// Whether the form is sent as `multipart/form-data`.
    pub fn multipart(&self) -> bool {
        self.encryption_type() == ENC_TYPE_MULTIPART
    }

    /// Switches between the multipart and url-encoded encodings.
    pub fn set_multipart(&mut self, multipart: bool) {
        let encryption_type = if multipart {
            ENC_TYPE_MULTIPART
        } else {
            ENC_TYPE_URL_ENCODED
        };
        self.set_encryption_type(encryption_type);
    }

    /// The autocomplete mode, `None` if unset or unknown.
    pub fn autocomplete(&self) -> Option<Autocomplete> {
        self.get(&Self::AUTOCOMPLETE)
    }

    /// Sets or removes the autocomplete mode.
    pub fn set_autocomplete(&mut self, autocomplete: Option<Autocomplete>) {
        self.set(&Self::AUTOCOMPLETE, autocomplete);
    }
}

element_type!(Form);

/// An `<input/>` of any type.
///
/// Most types have a dedicated wrapper, such as [`TextInput`] or
/// [`Checkbox`], that derefs to this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    element: VoidElement,
}

impl Input {
    const TYPE: TextAttribute = TextAttribute::new("type");
    const VALUE: TextAttribute = TextAttribute::with_default("value", "");
    const SIZE: Attribute<u32> = Attribute::new("size");
    const FOCUS: BooleanAttribute = BooleanAttribute::new("autofocus");

    /// Creates an input of `input_type` named `name`.
    pub fn new(input_type: &str, name: &str) -> Self {
        let mut input = Self {
            element: VoidElement::new("input"),
        };
        input.set(&Self::TYPE, Some(input_type.to_owned()));
        input.set_name(name);
        input
    }

    /// The `type`.
    pub fn input_type(&self) -> Option<String> {
        self.get(&Self::TYPE)
    }

    /// The control name, empty unless set.
    pub fn name(&self) -> String {
        self.get(&NAME).unwrap_or_default()
    }

    /// Sets the control name; empty removes it.
    pub fn set_name(&mut self, name: &str) {
        self.set(&NAME, Some(name.to_owned()));
    }

    /// The current value, empty unless set.
    pub fn value(&self) -> String {
        self.get(&Self::VALUE).unwrap_or_default()
    }

    /// Sets the value; empty removes it.
    pub fn set_value(&mut self, value: &str) {
        self.set(&Self::VALUE, Some(value.to_owned()));
    }

    /// Whether the value is read-only.
    pub fn readonly(&self) -> bool {
        self.get(&READONLY)
    }

    /// Makes the value read-only or editable.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.set(&READONLY, readonly);
    }

    /// Whether the control is disabled.
    pub fn disabled(&self) -> bool {
        self.get(&DISABLED)
    }

    /// Disables or enables the control.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.set(&DISABLED, disabled);
    }

    /// The `autocomplete` hint.
    pub fn autocomplete(&self) -> Option<String> {
        self.get(&AUTOCOMPLETE)
    }

    /// Sets or removes the `autocomplete` hint.
    pub fn set_autocomplete(&mut self, autocomplete: Option<&str>) {
        self.set(&AUTOCOMPLETE, autocomplete.map(str::to_owned));
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> Option<String> {
        self.get(&PLACEHOLDER)
    }

    /// Sets or removes the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: Option<&str>) {
        self.set(&PLACEHOLDER, placeholder.map(str::to_owned));
    }

    /// The width in characters.
    pub fn size(&self) -> Option<u32> {
        self.get(&Self::SIZE)
    }

    /// Sets or removes the width in characters.
    pub fn set_size(&mut self, size: impl Into<Option<u32>>) {
        self.set(&Self::SIZE, size.into());
    }

    /// Whether the control takes focus on page load.
    pub fn focus(&self) -> bool {
        self.get(&Self::FOCUS)
    }

    /// Sets or clears `autofocus`.
    pub fn set_focus(&mut self, focus: bool) {
        self.set(&Self::FOCUS, focus);
    }
}

void_element_type!(Input);

/// An [`Input`] of a fixed type, reached through `Deref`.
macro_rules! input_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            input: Input,
        }

        impl Deref for $name {
            type Target = Input;

            fn deref(&self) -> &Input {
                &self.input
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Input {
                &mut self.input
            }
        }

        impl HtmlElement for $name {
            fn base(&self) -> &htmlgen::ElementBase {
                self.input.base()
            }

            fn base_mut(&mut self) -> &mut htmlgen::ElementBase {
                self.input.base_mut()
            }
        }

        impl htmlgen::Generator for $name {
            fn generate(&self) -> htmlgen::Items {
                htmlgen::Generator::generate(&self.input)
            }
        }

        impl_node!($name);
    };
}

input_type!(
    /// `<input type="text"/>`.
    TextInput
);

impl TextInput {
    /// Creates a text field named `name` holding `value`.
    pub fn new(name: &str, value: &str) -> Self {
        let mut input = Input::new("text", name);
        input.set_value(value);
        Self { input }
    }
}

input_type!(
    /// `<input type="search"/>`.
    SearchInput
);

impl SearchInput {
    /// Creates a search field named `name`.
    pub fn new(name: &str) -> Self {
        Self {
            input: Input::new("search", name),
        }
    }
}

input_type!(
    /// `<input type="password"/>`.
    PasswordInput
);

impl PasswordInput {
    /// Creates a password field named `name`.
    pub fn new(name: &str) -> Self {
        Self {
            input: Input::new("password", name),
        }
    }
}

input_type!(
    /// `<input type="hidden"/>`.
    HiddenInput
);

impl HiddenInput {
    /// Creates a hidden field submitting `value` as `name`.
    pub fn new(name: &str, value: &str) -> Self {
        let mut input = Input::new("hidden", name);
        input.set_value(value);
        Self { input }
    }
}

input_type!(
    /// `<input type="number"/>`.
    NumberInput
);

impl NumberInput {
    const NUMBER: Attribute<f64> = Attribute::new("value");
    const MINIMUM: Attribute<f64> = Attribute::new("min");
    const MAXIMUM: Attribute<f64> = Attribute::new("max");
    const STEP: Attribute<f64> = Attribute::new("step");

    /// Creates a number field named `name`, optionally holding `number`.
    pub fn new(name: &str, number: Option<f64>) -> Self {
        let mut input = Self {
            input: Input::new("number", name),
        };
        input.set_number(number);
        input
    }

    /// The value as a number.
    pub fn number(&self) -> Option<f64> {
        self.get(&Self::NUMBER)
    }

    /// Sets or clears the value.
    pub fn set_number(&mut self, number: Option<f64>) {
        self.set(&Self::NUMBER, number);
    }

    /// The `min` bound.
    pub fn minimum(&self) -> Option<f64> {
        self.get(&Self::MINIMUM)
    }

    /// Sets or removes the `min` bound.
    pub fn set_minimum(&mut self, minimum: Option<f64>) {
        self.set(&Self::MINIMUM, minimum);
    }

    /// The `max` bound.
    pub fn maximum(&self) -> Option<f64> {
        self.get(&Self::MAXIMUM)
    }

    /// Sets or removes the `max` bound.
    pub fn set_maximum(&mut self, maximum: Option<f64>) {
        self.set(&Self::MAXIMUM, maximum);
    }

    /// The step granularity.
    pub fn step(&self) -> Option<f64> {
        self.get(&Self::STEP)
    }

    /// Sets or removes the step granularity.
    pub fn set_step(&mut self, step: Option<f64>) {
        self.set(&Self::STEP, step);
    }
}

input_type!(
    /// `<input type="date"/>`.
    DateInput
);

impl DateInput {
    const DATE: Attribute<Date> = Attribute::new("value");

    /// Creates a date field named `name`, empty when `date` is `None`.
    pub fn new(name: &str, date: Option<Date>) -> Self {
        let mut input = Self {
            input: Input::new("date", name),
        };
        input.set_date(date);
        input
    }

    /// The value as a date, `None` if empty or malformed.
    pub fn date(&self) -> Option<Date> {
        self.get(&Self::DATE)
    }

    /// Sets or clears the value.
    pub fn set_date(&mut self, date: Option<Date>) {
        self.set(&Self::DATE, date);
    }
}

input_type!(
    /// `<input type="time"/>`.
    ///
    /// Bounds are kept consistent: a minimum above the maximum, or the
    /// reverse, is rejected.
    ///
    /// ```
    /// use htmlgen_dom::TimeInput;
    /// use time::macros::time;
    ///
    /// let mut input = TimeInput::new("start", None);
    /// input.set_maximum(Some(time!(12:00))).unwrap();
    /// assert!(input.set_minimum(Some(time!(13:00))).is_err());
    /// assert!(input.set_step(Some(0.0)).is_err());
    /// ```
    TimeInput
);

impl TimeInput {
    const TIME: Attribute<Time> = Attribute::new("value");
    const MINIMUM: Attribute<Time> = Attribute::new("min");
    const MAXIMUM: Attribute<Time> = Attribute::new("max");
    const STEP: Attribute<f64> = Attribute::new("step");

    /// Creates a time field named `name`, empty when `time` is `None`.
    pub fn new(name: &str, time: Option<Time>) -> Self {
        let mut input = Self {
            input: Input::new("time", name),
        };
        input.set_time(time);
        input
    }

    /// The value as a time, `None` if empty or malformed.
    pub fn time(&self) -> Option<Time> {
        self.get(&Self::TIME)
    }

    /// Sets or clears the value.
    pub fn set_time(&mut self, time: Option<Time>) {
        self.set(&Self::TIME, time);
    }

    /// The earliest accepted time.
    pub fn minimum(&self) -> Option<Time> {
        self.get(&Self::MINIMUM)
    }

    /// Sets or removes the earliest accepted time.
    ///
    /// Fails with [`Error::OutOfRange`] if `minimum` is after the current
    /// maximum.
    pub fn set_minimum(&mut self, minimum: Option<Time>) -> Result<(), Error> {
        if let (Some(minimum), Some(maximum)) = (minimum, self.maximum()) {
            if minimum > maximum {
                debug!(%minimum, %maximum, "rejected time minimum");
                return Err(Error::OutOfRange {
                    name: "min",
                    reason: format!("{minimum} is after the maximum {maximum}"),
                });
            }
        }
        self.set(&Self::MINIMUM, minimum);
        Ok(())
    }

    /// The latest accepted time.
    pub fn maximum(&self) -> Option<Time> {
        self.get(&Self::MAXIMUM)
    }

    /// Sets or removes the latest accepted time.
    ///
    /// Fails with [`Error::OutOfRange`] if `maximum` is before the current
    /// minimum.
    pub fn set_maximum(&mut self, maximum: Option<Time>) -> Result<(), Error> {
        if let (Some(maximum), Some(minimum)) = (maximum, self.minimum()) {
            if maximum < minimum {
                debug!(%minimum, %maximum, "rejected time maximum");
                return Err(Error::OutOfRange {
                    name: "max",
                    reason: format!("{maximum} is before the minimum {minimum}"),
                });
            }
        }
        self.set(&Self::MAXIMUM, maximum);
        Ok(())
    }

    /// The step in seconds. Stored values that are not positive read as
    /// `None`.
    pub fn step(&self) -> Option<f64> {
        self.get(&Self::STEP).filter(|step| *step > 0.0)
    }

    /// Sets or removes the step in seconds, which must be positive.
    pub fn set_step(&mut self, step: Option<f64>) -> Result<(), Error> {
        if let Some(step) = step {
            if step.is_nan() || step <= 0.0 {
                debug!(step, "rejected time step");
                return Err(Error::OutOfRange {
                    name: "step",
                    reason: format!("{step} is not a positive number"),
                });
            }
        }
        self.set(&Self::STEP, step);
        Ok(())
    }
}

const CHECKED: BooleanAttribute = BooleanAttribute::new("checked");

macro_rules! checkable_input {
    ($name:ident, $type:literal) => {
        impl $name {
            #[doc = concat!("Creates a `", $type, "` named `name`; an empty `value` is left unset.")]
            pub fn new(name: &str, value: &str) -> Self {
                let mut input = Input::new($type, name);
                if !value.is_empty() {
                    input.set_value(value);
                }
                Self { input }
            }

            /// Whether the control is checked.
            pub fn checked(&self) -> bool {
                self.get(&CHECKED)
            }

            /// Checks or unchecks the control.
            pub fn set_checked(&mut self, checked: bool) {
                self.set(&CHECKED, checked);
            }
        }
    };
}

input_type!(
    /// `<input type="checkbox"/>`.
    Checkbox
);

checkable_input!(Checkbox, "checkbox");

input_type!(
    /// `<input type="radio"/>`.
    RadioButton
);

checkable_input!(RadioButton, "radio");

input_type!(
    /// `<input type="file"/>`.
    FileInput
);

impl FileInput {
    const MAX_LENGTH: Attribute<u32> = Attribute::new("maxlength");
    const ACCEPT: ListAttribute = ListAttribute::new("accept");

    /// Creates a file picker named `name`.
    pub fn new(name: &str) -> Self {
        Self {
            input: Input::new("file", name),
        }
    }

    /// The `maxlength`.
    pub fn max_length(&self) -> Option<u32> {
        self.get(&Self::MAX_LENGTH)
    }

    /// Sets or removes the `maxlength`.
    pub fn set_max_length(&mut self, max_length: Option<u32>) {
        self.set(&Self::MAX_LENGTH, max_length);
    }

    /// Accepted MIME types and extensions.
    pub fn accept(&self) -> Vec<String> {
        self.get(&Self::ACCEPT)
    }

    /// Replaces the accepted types; an empty list removes the attribute.
    pub fn set_accept<I>(&mut self, accept: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.set(&Self::ACCEPT, accept.into_iter().map(Into::into).collect());
    }
}

input_type!(
    /// `<input type="submit"/>`, labelled by its value.
    SubmitButton
);

impl SubmitButton {
    /// Creates a submit button showing `label`.
    pub fn new(label: &str) -> Self {
        let mut input = Input::new("submit", "");
        input.set_value(label);
        Self { input }
    }

    /// The caption, same as the value.
    pub fn label(&self) -> String {
        self.value()
    }

    /// Sets the caption.
    pub fn set_label(&mut self, label: &str) {
        self.set_value(label);
    }
}

container!(
    /// A `<button>` with arbitrary content.
    Button,
    "button"
);

impl Button {
    /// Whether the button is disabled.
    pub fn disabled(&self) -> bool {
        self.get(&DISABLED)
    }

    /// Disables or enables the button.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.set(&DISABLED, disabled);
    }
}

/// A `<textarea>`. Its children are the initial text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    element: Element,
}

impl TextArea {
    const COLUMNS: Attribute<u32> = Attribute::new("cols");
    const ROWS: Attribute<u32> = Attribute::new("rows");

    /// Creates an empty text area named `name`.
    pub fn new(name: &str) -> Self {
        let mut area = Self {
            element: Element::new("textarea"),
        };
        area.set_name(name);
        area
    }

    /// The control name, empty unless set.
    pub fn name(&self) -> String {
        self.get(&NAME).unwrap_or_default()
    }

    /// Sets the control name; empty removes it.
    pub fn set_name(&mut self, name: &str) {
        self.set(&NAME, Some(name.to_owned()));
    }

    /// Whether the text is read-only.
    pub fn readonly(&self) -> bool {
        self.get(&READONLY)
    }

    /// Makes the text read-only or editable.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.set(&READONLY, readonly);
    }

    /// Whether the control is disabled.
    pub fn disabled(&self) -> bool {
        self.get(&DISABLED)
    }

    /// Disables or enables the control.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.set(&DISABLED, disabled);
    }

    /// Visible width in characters (`cols`).
    pub fn columns(&self) -> Option<u32> {
        self.get(&Self::COLUMNS)
    }

    /// Sets or removes `cols`.
    pub fn set_columns(&mut self, columns: Option<u32>) {
        self.set(&Self::COLUMNS, columns);
    }

    /// Visible height in lines.
    pub fn rows(&self) -> Option<u32> {
        self.get(&Self::ROWS)
    }

    /// Sets or removes `rows`.
    pub fn set_rows(&mut self, rows: Option<u32>) {
        self.set(&Self::ROWS, rows);
    }

    /// The `autocomplete` hint.
    pub fn autocomplete(&self) -> Option<String> {
        self.get(&AUTOCOMPLETE)
    }

    /// Sets or removes the `autocomplete` hint.
    pub fn set_autocomplete(&mut self, autocomplete: Option<&str>) {
        self.set(&AUTOCOMPLETE, autocomplete.map(str::to_owned));
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> Option<String> {
        self.get(&PLACEHOLDER)
    }

    /// Sets or removes the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: Option<&str>) {
        self.set(&PLACEHOLDER, placeholder.map(str::to_owned));
    }
}

element_type!(TextArea);

/// A single-choice `<select>` list.
///
/// Selection works over the options among the children, including those
/// inside an [`OptionGroup`]. Options added with
/// [`create_option`](Self::create_option) or appended directly both count,
/// and removed ones stop counting:
///
/// ```
/// use htmlgen_dom::{Select, SelectOption};
///
/// let mut select = Select::new("element-name");
/// let first = select.create_option("Option 1", Some("v1"), false);
/// select.create_option("Option 2", Some("v2"), true);
/// select.append(SelectOption::new("Option 3", Some("v3")));
/// assert_eq!(select.selected_value().as_deref(), Some("v2"));
///
/// select.set_selected_value("v1").unwrap();
/// assert!(first.borrow().selected());
///
/// select.remove(first).unwrap();
/// assert!(select.set_selected_value("v1").is_err());
/// assert!(select.set_selected_value("v3").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    element: Element,
}

impl Select {
    /// Creates an empty list named `name`.
    pub fn new(name: &str) -> Self {
        let mut select = Self {
            element: Element::new("select"),
        };
        select.set_name(name);
        select
    }

    /// The control name, empty unless set.
    pub fn name(&self) -> String {
        self.get(&NAME).unwrap_or_default()
    }

    /// Sets the control name; empty removes it.
    pub fn set_name(&mut self, name: &str) {
        self.set(&NAME, Some(name.to_owned()));
    }

    /// Whether the control is disabled.
    pub fn disabled(&self) -> bool {
        self.get(&DISABLED)
    }

    /// Disables or enables the control.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.set(&DISABLED, disabled);
    }

    /// The `autocomplete` hint.
    pub fn autocomplete(&self) -> Option<String> {
        self.get(&AUTOCOMPLETE)
    }

    /// Sets or removes the `autocomplete` hint.
    pub fn set_autocomplete(&mut self, autocomplete: Option<&str>) {
        self.set(&AUTOCOMPLETE, autocomplete.map(str::to_owned));
    }

    /// Appends an option group labelled `label` and returns it.
    pub fn create_group(&mut self, label: &str) -> Shared<OptionGroup> {
        append_shared(&mut self.element, OptionGroup::new(label))
    }

    /// Appends an option and returns it. A `selected` option deselects all
    /// others.
    pub fn create_option(
        &mut self,
        label: impl Into<Item>,
        value: Option<&str>,
        selected: bool,
    ) -> Shared<SelectOption> {
        let option = append_shared(&mut self.element, SelectOption::new(label, value));
        if selected {
            self.set_selected_option(&option);
        }
        option
    }

    /// All options in document order, including those in groups.
    pub fn options(&self) -> Vec<Shared<SelectOption>> {
        let mut options = Vec::new();
        for child in self.children() {
            if let Some(option) = child.as_shared::<SelectOption>() {
                options.push(option);
            } else if let Some(group) = child.as_shared::<OptionGroup>() {
                options.extend(group.borrow().options());
            }
        }
        options
    }

/// The first selected option.
    pub fn selected_option(&self) -> Option<Shared<SelectOption>> {
        self.options()
            .into_iter()
            .find(|option| option.borrow().selected())
    }

    /// Selects `option` and deselects every other option.
    pub fn set_selected_option(&mut self, option: &Shared<SelectOption>) {
        for other in self.options() {
            other.borrow_mut().set_selected(false);
        }
        option.borrow_mut().set_selected(true);
    }

    /// The value of the first selected option.
    pub fn selected_value(&self) -> Option<String> {
        self.selected_option().map(|option| option.borrow().value())
    }

    /// Selects the first option whose value is `value`.
    ///
    /// Fails with [`Error::ValueNotFound`] if no option has that value.
    pub fn set_selected_value(&mut self, value: &str) -> Result<(), Error> {
        let option = self
            .options()
            .into_iter()
            .find(|option| option.borrow().value() == value);
        match option {
            Some(option) => {
                self.set_selected_option(&option);
                Ok(())
            }
            None => {
                debug!(value, "no option carries the value");
                Err(Error::ValueNotFound {
                    value: value.to_owned(),
                })
            }
        }
    }
}

element_type!(Select);

/// An `<optgroup>` inside a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    element: Element,
}

impl OptionGroup {
    const LABEL: TextAttribute = TextAttribute::new("label");

    /// Creates an empty group labelled `label`.
    pub fn new(label: &str) -> Self {
        let mut group = Self {
            element: Element::new("optgroup"),
        };
        group.set_label(label);
        group
    }

    /// The group label.
    pub fn label(&self) -> Option<String> {
        self.get(&Self::LABEL)
    }

    /// Sets the group label.
    pub fn set_label(&mut self, label: &str) {
        self.set(&Self::LABEL, Some(label.to_owned()));
    }

    /// Whether the whole group is disabled.
    pub fn disabled(&self) -> bool {
        self.get(&DISABLED)
    }

    /// Disables or enables the group.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.set(&DISABLED, disabled);
    }

    /// Appends an option and returns it.
    pub fn create_option(
        &mut self,
        label: impl Into<Item>,
        value: Option<&str>,
    ) -> Shared<SelectOption> {
        append_shared(&mut self.element, SelectOption::new(label, value))
    }

    /// The options among the children, in order.
    pub fn options(&self) -> Vec<Shared<SelectOption>> {
        shared_children(&self.element)
    }
}

element_type!(OptionGroup);

/// An `<option>`.
///
/// Without a `value` attribute, the option submits its rendered label:
///
/// ```
/// use htmlgen::GeneratorExt;
/// use htmlgen_dom::SelectOption;
///
/// let option = SelectOption::new("Label", None);
/// assert_eq!(option.value(), "Label");
/// assert_eq!(option.render(), "<option>Label</option>");
///
/// let option = SelectOption::new("Label", Some("test-value"));
/// assert_eq!(option.render(), r#"<option value="test-value">Label</option>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    element: Element,
}

impl SelectOption {
    const VALUE: TextAttribute = TextAttribute::new("value");
    const SELECTED: BooleanAttribute = BooleanAttribute::new("selected");

    /// Creates an option showing `label`.
    pub fn new(label: impl Into<Item>, value: Option<&str>) -> Self {
        let mut option = Self {
            element: Element::new("option"),
        };
        option.set_value(value);
        option.append(label);
        option
    }

    /// The submitted value: the `value` attribute, or the rendered label.
    pub fn value(&self) -> String {
        match self.get(&Self::VALUE) {
            Some(value) => value,
            None => htmlgen::to_string(&IteratorGenerator::new(self.children())),
        }
    }

    /// Sets or removes the `value` attribute.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.set(&Self::VALUE, value.map(str::to_owned));
    }

    /// Whether the option is disabled.
    pub fn disabled(&self) -> bool {
        self.get(&DISABLED)
    }

    /// Disables or enables the option.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.set(&DISABLED, disabled);
    }

    /// Whether the option is selected.
    pub fn selected(&self) -> bool {
        self.get(&Self::SELECTED)
    }

    /// Selects or deselects this option alone. Use
    /// [`Select::set_selected_option`] to keep the list single-choice.
    pub fn set_selected(&mut self, selected: bool) {
        self.set(&Self::SELECTED, selected);
    }
}

element_type!(SelectOption);

container!(
    /// A `<label>` for a form control.
    Label,
    "label"
);

impl Label {
    const FOR: TextAttribute = TextAttribute::new("for");

    /// The id of the labelled control.
    pub fn for_(&self) -> Option<String> {
        self.get(&Self::FOR)
    }

    /// Sets or removes the id of the labelled control.
    pub fn set_for(&mut self, id: Option<&str>) {
        self.set(&Self::FOR, id.map(str::to_owned));
    }
}

#[cfg(test)]
mod tests {
    use htmlgen::GeneratorExt;
    use time::macros::{date, time};

    use super::*;

    #[test]
    fn test_form_defaults() {
        let form = Form::new("GET", "");
        assert_eq!(form.render(), "<form></form>");
        assert_eq!(form.method(), "GET");
        assert_eq!(form.url(), "");
        assert_eq!(form.target(), "_self");
        assert_eq!(form.encryption_type(), ENC_TYPE_URL_ENCODED);
        assert!(!form.multipart());
        assert_eq!(form.autocomplete(), None);
    }

    #[test]
    fn test_form_attributes() {
        let mut form = Form::new("POST", "/feedback");
        form.set_blank_target();
        form.set_autocomplete(Some(Autocomplete::Off));
        assert_eq!(
            form.render(),
            r#"<form action="/feedback" autocomplete="off" method="POST" target="_blank"></form>"#
        );
    }

    #[test]
    fn test_form_multipart() {
        let mut form = Form::new("POST", "/upload");
        form.set_multipart(true);
        assert!(form.multipart());
        assert_eq!(form.attribute("enctype"), Some(ENC_TYPE_MULTIPART));
        form.set_multipart(false);
        assert!(!form.has_attribute("enctype"));
    }

    #[test]
    fn test_input() {
        let mut input = Input::new("text", "description");
        input.set_size(20);
        input.set_placeholder(Some("Enter description..."));
        input.set_focus(true);
        assert_eq!(
            input.render(),
            r#"<input autofocus="autofocus" name="description" placeholder="Enter description..." size="20" type="text"/>"#
        );
        assert_eq!(input.input_type().as_deref(), Some("text"));
        assert_eq!(input.value(), "");
        input.set_size(None);
        assert_eq!(input.size(), None);
    }

    #[test]
    fn test_input_flags() {
        let mut input = Input::new("text", "");
        input.set_readonly(true);
        input.set_disabled(true);
        assert_eq!(
            input.render(),
            r#"<input disabled="disabled" readonly="readonly" type="text"/>"#
        );
        assert!(input.readonly() && input.disabled());
    }

    #[test]
    fn test_text_input() {
        let mut input = TextInput::new("description", "Current Text");
        assert_eq!(
            input.render(),
            r#"<input name="description" type="text" value="Current Text"/>"#
        );
        input.set_value("");
        assert_eq!(input.render(), r#"<input name="description" type="text"/>"#);
    }

    #[test]
    fn test_simple_inputs() {
        assert_eq!(
            SearchInput::new("q").render(),
            r#"<input name="q" type="search"/>"#
        );
        assert_eq!(
            PasswordInput::new("pw").render(),
            r#"<input name="pw" type="password"/>"#
        );
        assert_eq!(
            HiddenInput::new("token", "abc").render(),
            r#"<input name="token" type="hidden" value="abc"/>"#
        );
    }

    #[test]
    fn test_number_input() {
        let mut input = NumberInput::new("n", Some(3.5));
        input.set_minimum(Some(1.0));
        input.set_maximum(Some(10.0));
        input.set_step(Some(0.5));
        assert_eq!(
            input.render(),
            r#"<input max="10" min="1" name="n" step="0.5" type="number" value="3.5"/>"#
        );
        assert_eq!(input.number(), Some(3.5));
        input.set_number(None);
        assert_eq!(input.number(), None);
        assert_eq!(input.step(), Some(0.5));
    }

    #[test]
    fn test_date_input() {
        let mut input = DateInput::new("day", None);
        assert_eq!(input.render(), r#"<input name="day" type="date"/>"#);
        assert_eq!(input.date(), None);
        input.set_date(Some(date!(2014 - 04 - 05)));
        assert_eq!(input.value(), "2014-04-05");
        assert_eq!(input.date(), Some(date!(2014 - 04 - 05)));
        input.set_value("yesterday");
        assert_eq!(input.date(), None);
    }

    #[test]
    fn test_time_input() {
        let mut input = TimeInput::new("at", Some(time!(14:30)));
        assert_eq!(input.value(), "14:30:00");
        assert_eq!(input.time(), Some(time!(14:30)));
        input.set_time(None);
        assert_eq!(input.render(), r#"<input name="at" type="time"/>"#);
    }

    #[test]
    fn test_time_input_bounds() {
        let mut input = TimeInput::new("at", None);
        input.set_minimum(Some(time!(10:00))).unwrap();
        input.set_maximum(Some(time!(12:00))).unwrap();
        assert_eq!(input.attribute("min"), Some("10:00:00"));
        assert_eq!(input.attribute("max"), Some("12:00:00"));

        let err = input.set_minimum(Some(time!(13:00))).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { name: "min", .. }));
        let err = input.set_maximum(Some(time!(9:00))).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { name: "max", .. }));
        assert_eq!(input.minimum(), Some(time!(10:00)));

        input.set_minimum(None).unwrap();
        input.set_maximum(Some(time!(9:00))).unwrap();
        assert_eq!(input.maximum(), Some(time!(9:00)));
    }

    #[test]
    fn test_time_input_step() {
        let mut input = TimeInput::new("at", None);
        assert_eq!(input.step(), None);
        input.set_step(Some(1.5)).unwrap();
        assert_eq!(input.step(), Some(1.5));
        assert!(input.set_step(Some(0.0)).is_err());
        assert!(input.set_step(Some(-1.0)).is_err());
        assert!(input.set_step(Some(f64::NAN)).is_err());
        assert_eq!(input.step(), Some(1.5));

        input.set_attribute("step", "-5");
        assert_eq!(input.step(), None);
        input.set_attribute("step", "fast");
        assert_eq!(input.step(), None);
        input.set_step(None).unwrap();
        assert!(!input.has_attribute("step"));
    }

    #[test]
    fn test_checkable_inputs() {
        let mut checkbox = Checkbox::new("my-name", "my-value");
        checkbox.set_checked(true);
        assert_eq!(
            checkbox.render(),
            r#"<input checked="checked" name="my-name" type="checkbox" value="my-value"/>"#
        );
        assert!(checkbox.checked());

        let radio = RadioButton::new("", "");
        assert_eq!(radio.render(), r#"<input type="radio"/>"#);
        assert!(!radio.checked());
    }

    #[test]
    fn test_file_input() {
        let mut input = FileInput::new("upload");
        input.set_max_length(Some(1000));
        input.set_accept(["image/png", "image/jpeg"]);
        assert_eq!(
            input.render(),
            r#"<input accept="image/png,image/jpeg" maxlength="1000" name="upload" type="file"/>"#
        );
        assert_eq!(input.accept(), ["image/png", "image/jpeg"]);
        input.set_accept(Vec::<String>::new());
        assert!(input.accept().is_empty());
    }

    #[test]
    fn test_submit_button() {
        let mut button = SubmitButton::new("My Label");
        assert_eq!(button.label(), "My Label");
        assert_eq!(button.value(), "My Label");
        button.set_label("Send");
        assert_eq!(button.render(), r#"<input type="submit" value="Send"/>"#);
    }

    #[test]
    fn test_button() {
        let mut button = Button::with_content(["My Label"]);
        button.set_disabled(true);
        assert_eq!(
            button.render(),
            r#"<button disabled="disabled">My Label</button>"#
        );
    }

    #[test]
    fn test_text_area() {
        let mut area = TextArea::new("element-name");
        area.set_placeholder(Some("Placeholder text ..."));
        area.set_columns(Some(40));
        area.set_rows(Some(5));
        area.append("Initial <content>");
        assert_eq!(
            area.render(),
            r#"<textarea cols="40" name="element-name" placeholder="Placeholder text ..." rows="5">Initial &lt;content&gt;</textarea>"#
        );
        assert_eq!(area.columns(), Some(40));
        assert_eq!(area.name(), "element-name");
    }

    #[test]
    fn test_select_render() {
        let mut select = Select::new("choice");
        select.create_option("Option 1", Some("v1"), false);
        select.create_option("Option 2", None, true);
        assert_eq!(
            select.render(),
            r#"<select name="choice"><option value="v1">Option 1</option><option selected="selected">Option 2</option></select>"#
        );
    }

    #[test]
    fn test_select_single_choice() {
        let mut select = Select::new("choice");
        let first = select.create_option("Option 1", Some("v1"), true);
        let second = select.create_option("Option 2", Some("v2"), true);
        assert!(!first.borrow().selected());
        assert!(second.borrow().selected());
        assert_eq!(select.selected_value().as_deref(), Some("v2"));

        select.set_selected_option(&first);
        assert!(!second.borrow().selected());
        assert!(std::rc::Rc::ptr_eq(&select.selected_option().unwrap(), &first));
    }

    #[test]
    fn test_select_value_not_found() {
        let mut select = Select::new("");
        assert_eq!(select.selected_option().map(|_| ()), None);
        assert_eq!(select.selected_value(), None);
        let err = select.set_selected_value("missing").unwrap_err();
        assert_eq!(
            err,
            Error::ValueNotFound {
                value: "missing".to_owned()
            }
        );
    }

    #[test]
    fn test_select_groups() {
        let mut select = Select::new("");
        let group = select.create_group("Group 1");
        group.borrow_mut().create_option("Option 1", None);
        let option = group.borrow_mut().create_option("Option 2", None);
        select.create_option("Option 3", None, false);
        assert_eq!(select.options().len(), 3);

        select.set_selected_value("Option 2").unwrap();
        assert!(option.borrow().selected());
        assert_eq!(
            select.render(),
            concat!(
                r#"<select><optgroup label="Group 1"><option>Option 1</option>"#,
                r#"<option selected="selected">Option 2</option></optgroup>"#,
                "<option>Option 3</option></select>",
            )
        );
    }

    #[test]
    fn test_select_forgets_removed_options() {
        let mut select = Select::new("s");
        let a = select.create_option("A", Some("a"), false);
        select.create_option("B", Some("b"), true);

        select.remove(a).unwrap();
        assert_eq!(select.options().len(), 1);
        assert!(select.set_selected_value("a").is_err());
        assert_eq!(select.selected_value().as_deref(), Some("b"));

        select.clear();
        assert!(select.options().is_empty());
        assert_eq!(select.selected_value(), None);
        assert_eq!(
            select.set_selected_value("b"),
            Err(Error::ValueNotFound {
                value: "b".to_owned()
            })
        );
        assert_eq!(select.render(), r#"<select name="s"></select>"#);
    }

    #[test]
    fn test_select_appended_options_are_selectable() {
        let mut select = Select::new("s");
        select.append(SelectOption::new("A", Some("a")));
        let mut group = OptionGroup::new("G");
        group.append(SelectOption::new("B", Some("b")));
        select.append(group);
        select.append("text is ignored");
        assert_eq!(select.options().len(), 2);

        select.set_selected_value("b").unwrap();
        assert_eq!(select.selected_value().as_deref(), Some("b"));
        select.set_selected_value("a").unwrap();
        assert_eq!(
            select.render(),
            concat!(
                r#"<select name="s"><option selected="selected" value="a">A</option>"#,
                r#"<optgroup label="G"><option value="b">B</option></optgroup>"#,
                "text is ignored</select>",
            )
        );
    }

    #[test]
    fn test_option_group_forgets_removed_options() {
        let mut select = Select::new("");
        let group = select.create_group("G");
        let option = group.borrow_mut().create_option("A", None);
        group.borrow_mut().remove(option).unwrap();
        assert!(group.borrow().options().is_empty());
        assert!(select.set_selected_value("A").is_err());
    }

    #[test]
    fn test_option_value_falls_back_to_label() {
        let mut option = SelectOption::new("A & B", None);
        assert_eq!(option.value(), "A &amp; B");
        option.set_value(Some("ab"));
        assert_eq!(option.value(), "ab");
        option.set_disabled(true);
        assert!(option.disabled());
    }

    #[test]
    fn test_label() {
        let mut label = Label::with_content([Item::from(Checkbox::new("", "")), " My Label".into()]);
        assert_eq!(
            label.render(),
            r#"<label><input type="checkbox"/> My Label</label>"#
        );
        label.set_for(Some("box"));
        assert_eq!(label.for_().as_deref(), Some("box"));
    }
}
