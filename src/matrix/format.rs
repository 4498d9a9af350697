//! Literal formatting of matrices for the shader test text
//!
//! Values are laid out row-major. Every row, the first included, is preceded
//! by a line continuation, so a value list starts on the line after its
//! command and every line but the last ends in ` \`.

use ndarray::Array2;

/// Separator placed before each row of a value list
pub const ROW_SEPARATOR: &str = " \\\n ";

/// A scalar with a canonical literal spelling in generated files
pub trait LiteralScalar {
    fn literal(&self) -> String;
}

impl LiteralScalar for i64 {
    fn literal(&self) -> String {
        self.to_string()
    }
}

// Shortest round-trip form; integral values keep a trailing `.0`.
impl LiteralScalar for f32 {
    fn literal(&self) -> String {
        format!("{:?}", self)
    }
}

/// Space-separated values of each row, each row prefixed by [`ROW_SEPARATOR`]
pub fn matrix_literal<T: LiteralScalar>(matrix: &Array2<T>) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        out.push_str(ROW_SEPARATOR);
        let values: Vec<String> = row.iter().map(LiteralScalar::literal).collect();
        out.push_str(&values.join(" "));
    }
    out
}
