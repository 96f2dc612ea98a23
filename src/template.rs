/// C source templates.
///
/// A template knows how to write three pieces of a generated file: a fixed
/// header, one unit per index, and a fixed footer. Everything is written
/// directly to a `Write` sink; indices are formatted with `itoa` so the
/// per-unit loop never allocates.
use std::io::{self, Write};

const INCLUDE_STDIO: &[u8] = b"#include <stdio.h>\n\n";

/// One repeated, index-parameterized fragment of generated text, plus the
/// boilerplate around it.
pub trait UnitTemplate {
    /// Fixed text emitted once before any unit.
    fn write_header(&self, w: &mut dyn Write) -> io::Result<()>;

    /// The unit for index `i`. Depends only on `i`.
    fn write_unit(&self, w: &mut dyn Write, i: u64) -> io::Result<()>;

    /// Fixed text emitted once after all units. `count` is the number of
    /// units written, for footers that refer back to them.
    fn write_footer(&self, w: &mut dyn Write, count: u64) -> io::Result<()>;
}

/// `count` zero-argument functions plus a `main` that calls each of them in
/// definition order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FanOut;

impl UnitTemplate for FanOut {
    fn write_header(&self, w: &mut dyn Write) -> io::Result<()> {
        w.write_all(INCLUDE_STDIO)
    }

    // void func{i}() { int x={i}; x+=1; }
    fn write_unit(&self, w: &mut dyn Write, i: u64) -> io::Result<()> {
        let mut buf = itoa::Buffer::new();
        let n = buf.format(i).as_bytes();
        w.write_all(b"void func")?;
        w.write_all(n)?;
        w.write_all(b"() { int x=")?;
        w.write_all(n)?;
        w.write_all(b"; x+=1; }\n")
    }

    fn write_footer(&self, w: &mut dyn Write, count: u64) -> io::Result<()> {
        w.write_all(b"\nint main(){\n")?;
        let mut buf = itoa::Buffer::new();
        for i in 0..count {
            w.write_all(b"    func")?;
            w.write_all(buf.format(i).as_bytes())?;
            w.write_all(b"();\n")?;
        }
        w.write_all(b"    printf(\"Done!\\n\");\n    return 0;\n}\n")
    }
}

/// `count` uniquely named global integers, one per line, plus a trivial
/// `main`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineVolume;

impl UnitTemplate for LineVolume {
    fn write_header(&self, w: &mut dyn Write) -> io::Result<()> {
        w.write_all(INCLUDE_STDIO)
    }

    fn write_unit(&self, w: &mut dyn Write, i: u64) -> io::Result<()> {
        let mut buf = itoa::Buffer::new();
        w.write_all(b"int a")?;
        w.write_all(buf.format(i).as_bytes())?;
        w.write_all(b"=0;\n")
    }

    fn write_footer(&self, w: &mut dyn Write, _count: u64) -> io::Result<()> {
        w.write_all(b"\nint main(){ printf(\"done\\n\"); return 0; }\n")
    }
}
