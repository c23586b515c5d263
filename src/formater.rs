/// Turn an arbitrary string (usually an input path) into a C identifier.
///
/// A leading char that is neither `_` nor a letter becomes `_`, then every
/// char that is not alphanumeric or `_` becomes `_`.
pub fn c_identifier(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return "_".to_string();
    };

    let mut output = String::with_capacity(name.len());
    if first == '_' || first.is_alphabetic() {
        output.push(first);
    } else {
        output.push('_');
    }

    for letter in chars {
        if letter == '_' || letter.is_alphanumeric() {
            output.push(letter)
        } else {
            output.push('_')
        }
    }

    output
}

pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
