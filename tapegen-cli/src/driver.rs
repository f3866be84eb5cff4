//! Built-in generation drivers

use tapegen_codegen::{Generator, Result};

/// Read two bytes, add them, write the sum
///
/// Register 0 holds the first input and ends up holding the sum; register 1
/// holds the second input and is drained.
pub fn add_two_bytes(g: &mut Generator) -> Result<()> {
    let (a, b) = (g.register(0), g.register(1));

    g.annotate("read r0");
    g.read_byte_into(a);
    g.annotate("read r1");
    g.read_byte_into(b);
    g.annotate("r0 += r1");
    g.add(a, b)?;
    g.annotate("write r0");
    g.write_byte_from(a);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapegen_runtime::run;

    #[test]
    fn test_add_two_bytes_program() {
        let mut g = Generator::new();
        add_two_bytes(&mut g).unwrap();
        assert_eq!(g.export_program(), ">>>>>,>,[-<+>]<.");
    }

    #[test]
    fn test_add_two_bytes_runs() {
        let mut g = Generator::new();
        add_two_bytes(&mut g).unwrap();
        assert_eq!(run(g.export_program(), vec![5, 7]).unwrap(), vec![12]);
        assert_eq!(run(g.export_program(), vec![200, 100]).unwrap(), vec![44]);
    }

    #[test]
    fn test_add_two_bytes_listing() {
        let mut g = Generator::new();
        add_two_bytes(&mut g).unwrap();
        let listing = g.export_full();
        assert!(listing.starts_with("# read r0\n>>>>>\n,\n"));
        assert!(listing.contains("# r0 += r1\n[\n  -\n  <\n  +\n  >\n]\n"));
    }
}
