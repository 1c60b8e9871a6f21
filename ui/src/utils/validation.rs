use crate::features::plans::SectionValidity;

pub fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

pub fn field_style(has_error: bool) -> &'static str {
    if has_error {
        "border: 2px solid #ef4444; background-color: #fef2f2;"
    } else {
        ""
    }
}

pub fn validity_style(validity: SectionValidity) -> &'static str {
    match validity {
        SectionValidity::Valid => "color: #10b981;",
        SectionValidity::HasError => "color: #9ca3af;",
    }
}
