use std::io::Write;

use anyhow::{Context, Result};
use vecmat::{Matrix, Operand, Organization, Vector};

/// Binary operation selected on the `eval` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Dot,
}

impl BinaryOp {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "add" | "+" => Some(BinaryOp::Add),
            "sub" | "-" => Some(BinaryOp::Sub),
            "dot" | "." => Some(BinaryOp::Dot),
            _ => None,
        }
    }
}

/// Prints both vectors, their sum, difference and dot product, and each
/// vector's magnitude and unit vector.
pub fn run_vector<W: Write>(lhs: &str, rhs: &str, out: &mut W) -> Result<()> {
    let v1: Vector = lhs.parse().context("Failed to parse left vector")?;
    let v2: Vector = rhs.parse().context("Failed to parse right vector")?;
    log::info!("Vector demo on dimensions {} and {}", v1.len(), v2.len());

    writeln!(out, "v1: {}", v1)?;
    writeln!(out, "v2: {}", v2)?;
    writeln!(out, "v1 + v2: {}", (&v1 + &v2)?)?;
    writeln!(out, "v1 - v2: {}", (&v1 - &v2)?)?;
    writeln!(out, "v1 . v2: {}", v1.dot(&v2)?)?;

    for (name, v) in [("v1", &v1), ("v2", &v2)] {
        writeln!(out, "|{}|: {}", name, v.magnitude())?;
        match v.unit_vector() {
            Ok(unit) => writeln!(out, "unit({}): {}", name, unit)?,
            Err(e) => writeln!(out, "unit({}): undefined ({})", name, e)?,
        }
    }
    writeln!(out, "v1 repr: {:?}", v1)?;
    Ok(())
}

/// Prints both matrices, their sum and difference, and their tab-separated forms.
pub fn run_matrix<W: Write>(lhs: &str, rhs: &str, out: &mut W) -> Result<()> {
    let a: Matrix = lhs.parse().context("Failed to parse left matrix")?;
    let b: Matrix = rhs.parse().context("Failed to parse right matrix")?;
    log::info!("Matrix demo on shapes {:?} and {:?}", a.shape(), b.shape());

    writeln!(out, "Matrix A:\n{}", a)?;
    writeln!(out, "Matrix B:\n{}", b)?;
    writeln!(out, "A + B:\n{}", (&a + &b)?)?;
    writeln!(out, "A - B:\n{}", (&a - &b)?)?;
    writeln!(out, "A repr:\n{:?}", a)?;
    writeln!(out, "B repr:\n{:?}", b)?;
    Ok(())
}

/// Evaluates one operation on two operands whose kinds come from the input.
pub fn run_eval<W: Write>(lhs: &str, op: BinaryOp, rhs: &str, out: &mut W) -> Result<()> {
    let a: Operand = lhs.parse().context("Failed to parse left operand")?;
    let b: Operand = rhs.parse().context("Failed to parse right operand")?;
    log::info!("Evaluating {:?} on {} and {}", op, a.kind(), b.kind());

    match op {
        BinaryOp::Add => writeln!(out, "{}", a.add(&b)?)?,
        BinaryOp::Sub => writeln!(out, "{}", a.subtract(&b)?)?,
        BinaryOp::Dot => writeln!(out, "{}", a.dot(&b)?)?,
    }
    Ok(())
}

pub fn run_organization<W: Write>(org: &Organization, out: &mut W) -> Result<()> {
    writeln!(out, "{}", org)?;
    writeln!(out, "{:?}", org)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_binary_op_names() {
        assert_eq!(BinaryOp::from_name("ADD"), Some(BinaryOp::Add));
        assert_eq!(BinaryOp::from_name("-"), Some(BinaryOp::Sub));
        assert_eq!(BinaryOp::from_name("dot"), Some(BinaryOp::Dot));
        assert_eq!(BinaryOp::from_name("mul"), None);
    }

    #[test]
    fn test_vector_report() {
        let text = render(|out| run_vector("1,2,3", "4,5,6", out));
        assert!(text.contains("v1: (1 ,2 ,3)"));
        assert!(text.contains("v1 + v2: (5 ,7 ,9)"));
        assert!(text.contains("v1 - v2: (-3 ,-3 ,-3)"));
        assert!(text.contains("v1 . v2: 32"));
        assert!(text.contains("v1 repr: Vector((1.0, 2.0, 3.0))"));
    }

    #[test]
    fn test_vector_report_with_zero_vector() {
        let text = render(|out| run_vector("0,0", "3,4", out));
        assert!(text.contains("unit(v1): undefined"));
        assert!(text.contains("unit(v2): (0.6 ,0.8)"));
    }

    #[test]
    fn test_vector_dimension_mismatch_is_error() {
        let mut buf = Vec::new();
        let err = run_vector("1,2", "1,2,3", &mut buf).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
    }

    #[test]
    fn test_matrix_report() {
        let text = render(|out| run_matrix("1,2,3;4,5,6", "7,8,9;10,11,12", out));
        assert!(text.contains("A + B:\n[8 ,10 ,12]\n[14 ,16 ,18]"));
        assert!(text.contains("A repr:\n1\t2\t3\n4\t5\t6"));
    }

    #[test]
    fn test_eval() {
        assert_eq!(
            render(|out| run_eval("1,2,3", BinaryOp::Dot, "4,5,6", out)),
            "32\n"
        );
        assert_eq!(
            render(|out| run_eval("1,2;3,4", BinaryOp::Sub, "1,1;1,1", out)),
            "[0 ,1]\n[2 ,3]\n"
        );
        let mut buf = Vec::new();
        let err = run_eval("1,2", BinaryOp::Add, "1,2;3,4", &mut buf).unwrap_err();
        assert_eq!(err.to_string(), "Cannot add Vector with Matrix");
    }

    #[test]
    fn test_organization_report() {
        let org = Organization::new("Acme", "1 Road", "hi@acme.test");
        let text = render(|out| run_organization(&org, out));
        assert_eq!(
            text,
            "Acme located at 1 Road. Contact: hi@acme.test\n\
             Organization(name=Acme, address=1 Road, contact_email=hi@acme.test)\n"
        );
    }
}
