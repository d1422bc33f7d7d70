use input_core::FieldMode;

/// Element `type` values the field distinguishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ElementType {
    #[default]
    Text,
    Number,
    Password,
    Email,
    Tel,
    Search,
    Url,
    Other,
}

impl ElementType {
    /// The `type` the rendered field carries.
    ///
    /// Unknown types fall back to `text`, as they do on the platform.
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementType::Text | ElementType::Other => "text",
            ElementType::Number => "number",
            ElementType::Password => "password",
            ElementType::Email => "email",
            ElementType::Tel => "tel",
            ElementType::Search => "search",
            ElementType::Url => "url",
        }
    }
}

/// Resolve a `type` attribute value.
pub fn element_type(ty: Option<&str>) -> ElementType {
    let ty = ty.map(str::trim).filter(|s| !s.is_empty());

    match ty {
        None => ElementType::Text, // missing type defaults to text
        Some(t) if t.eq_ignore_ascii_case("text") => ElementType::Text,
        Some(t) if t.eq_ignore_ascii_case("number") => ElementType::Number,
        Some(t) if t.eq_ignore_ascii_case("password") => ElementType::Password,
        Some(t) if t.eq_ignore_ascii_case("email") => ElementType::Email,
        Some(t) if t.eq_ignore_ascii_case("tel") => ElementType::Tel,
        Some(t) if t.eq_ignore_ascii_case("search") => ElementType::Search,
        Some(t) if t.eq_ignore_ascii_case("url") => ElementType::Url,
        _ => ElementType::Other,
    }
}

/// Pick the field mode. Currency wins over the element type.
pub fn field_mode(ty: ElementType, is_currency: bool) -> FieldMode {
    if is_currency {
        FieldMode::Grouped
    } else if ty == ElementType::Number {
        FieldMode::Numeric
    } else {
        FieldMode::Plain
    }
}
