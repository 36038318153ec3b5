//! PLA (Programmable Logic Array) export
//!
//! Truth tables and minimized forms can be written in the Berkeley PLA text
//! format understood by espresso and most logic-synthesis tools:
//!
//! ```text
//! .i 2
//! .ilb A B
//! .o 1
//! .ob F
//! .p 2
//! 10 1
//! 01 1
//! .e
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PLAWriteError;
use crate::minimize::{Minimized, MinimizedForm};
use crate::table::{bit_at, TruthTable, VariableSet};

/// Which sets of cubes to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PLAType {
    /// ON-set only, terminated with `.e`
    #[default]
    F,
    /// ON-set and OFF-set, with a `.type fr` header, terminated with `.end`
    FR,
}

/// One line of the cube section: input pattern and the output it asserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cube {
    inputs: Vec<Option<bool>>,
    output: bool,
}

/// Internal trait for types that can be serialised to PLA format
pub(crate) trait PLASerialisable {
    fn pla_variables(&self) -> &VariableSet;

    /// ON-set cubes (`output == true`) and, for FR, OFF-set cubes
    fn pla_cubes(&self, pla_type: PLAType) -> Vec<Cube>;
}

/// Trait for types that support PLA serialisation
pub trait PLAWriter {
    /// Write PLA text to any `Write` implementation
    ///
    /// Both `to_pla_string` and `to_pla_file` delegate to this method.
    fn write_pla<W: Write>(&self, writer: &mut W, pla_type: PLAType)
        -> Result<(), PLAWriteError>;

    /// Render PLA text into a string
    ///
    /// ```
    /// use bool_solver::{parse_and_evaluate, PLAType, PLAWriter};
    ///
    /// let table = parse_and_evaluate("A.B").unwrap();
    /// let pla = table.to_pla_string(PLAType::F).unwrap();
    /// assert!(pla.contains(".p 1\n11 1\n"));
    /// ```
    fn to_pla_string(&self, pla_type: PLAType) -> Result<String, PLAWriteError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer, pla_type)?;
        // Only ASCII is ever written
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write PLA text to a file, creating or truncating it
    fn to_pla_file<P: AsRef<Path>>(&self, path: P, pla_type: PLAType) -> Result<(), PLAWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer, pla_type)?;
        writer.flush()?;
        Ok(())
    }
}

impl<T: PLASerialisable> PLAWriter for T {
    fn write_pla<W: Write>(
        &self,
        writer: &mut W,
        pla_type: PLAType,
    ) -> Result<(), PLAWriteError> {
        if pla_type == PLAType::FR {
            writeln!(writer, ".type fr")?;
        }

        let variables = self.pla_variables();
        writeln!(writer, ".i {}", variables.len())?;
        if !variables.is_empty() {
            write!(writer, ".ilb")?;
            for name in variables.iter() {
                write!(writer, " {}", name)?;
            }
            writeln!(writer)?;
        }
        writeln!(writer, ".o 1")?;
        writeln!(writer, ".ob F")?;

        let cubes = self.pla_cubes(pla_type);
        writeln!(writer, ".p {}", cubes.len())?;
        for cube in &cubes {
            for input in &cube.inputs {
                let c = match input {
                    Some(false) => '0',
                    Some(true) => '1',
                    None => '-',
                };
                write!(writer, "{}", c)?;
            }
            writeln!(writer, " {}", u8::from(cube.output))?;
        }

        match pla_type {
            PLAType::F => writeln!(writer, ".e")?,
            PLAType::FR => writeln!(writer, ".end")?,
        }
        Ok(())
    }
}

impl PLASerialisable for TruthTable {
    fn pla_variables(&self) -> &VariableSet {
        self.variables()
    }

    fn pla_cubes(&self, pla_type: PLAType) -> Vec<Cube> {
        let width = self.num_variables();
        self.outputs()
            .iter()
            .enumerate()
            .filter(|(_, output)| **output || pla_type == PLAType::FR)
            .map(|(index, &output)| Cube {
                inputs: (0..width)
                    .map(|position| Some(bit_at(index, width, position)))
                    .collect(),
                output,
            })
            .collect()
    }
}

/// Cubes of one form, tagged with the output value they assert
///
/// SOP implicants cover the ON-set, POS implicants the OFF-set. A constant
/// form equal to `output` is the universal cube; otherwise it adds nothing.
fn form_cubes(form: &MinimizedForm, output: bool) -> Vec<Cube> {
    match form.as_constant() {
        Some(value) if value == output => vec![Cube {
            inputs: vec![None; form.variables().len()],
            output,
        }],
        Some(_) => Vec::new(),
        None => form
            .implicants()
            .iter()
            .map(|imp| Cube {
                inputs: imp.inputs(),
                output,
            })
            .collect(),
    }
}

impl PLASerialisable for Minimized {
    fn pla_variables(&self) -> &VariableSet {
        self.variables()
    }

    fn pla_cubes(&self, pla_type: PLAType) -> Vec<Cube> {
        let mut cubes = form_cubes(self.sop(), true);
        if pla_type == PLAType::FR {
            cubes.extend(form_cubes(self.pos(), false));
        }
        cubes
    }
}
