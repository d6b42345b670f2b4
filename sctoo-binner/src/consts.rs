pub const BINNER_CMD: &str = "binner";

/// Escapes accepted in a separator given on the command line.
pub const SEPARATOR_ESCAPES: [(&str, &str); 2] = [("\\t", "\t"), ("\\n", "\n")];
