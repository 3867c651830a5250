//! Verilog-A text rendering of a [`CompiledModel`].
//!
//! # Layout
//!
//! ```text
//! // Auto-generated by pwlgen
//! `include "discipline.h"
//! `include "constants.h"
//!
//! module pwl_waves(CLK, EN);
//!     output CLK, EN;
//!     electrical CLK, EN;
//!
//!     parameter real vlow = 0;
//!     parameter real vhigh = 1.2;
//!
//!     real vsel_0, tau_0, vsel_1;
//!     integer n_0;
//!
//!     analog begin
//!     @(initial_step) begin
//!         ...
//!     end
//!
//!     // CLK : periodic
//!     ...
//!     V(CLK) <+ transition(vsel_0, 0, 1e-11);
//!     V(EN) <+ transition(vsel_1, 0, 1e-11);
//!     end
//! endmodule
//! ```

use std::fmt;

use crate::model::{CompiledModel, LevelChain, SignalBody, CROSS_EPSILON};

/// Significant digits used for every real literal.
const SIGNIFICANT_DIGITS: usize = 12;

/// Formats a real literal with 12 significant digits in `%g` style.
///
/// Trailing zeros are dropped; exponents outside `[-4, 12)` switch to
/// scientific notation with a signed two-digit exponent (`1e-09`).
pub fn format_real(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // The exponent must be taken after rounding to the target precision.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return value.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return value.to_string();
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl CompiledModel {
    /// Renders the module as Verilog-A source text.
    pub fn to_verilog_a(&self) -> String {
        self.to_string()
    }

    fn write_verilog_a<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let ports = self.ports().collect::<Vec<_>>().join(", ");

        writeln!(out, "// Auto-generated by pwlgen")?;
        writeln!(out, "`include \"discipline.h\"")?;
        writeln!(out, "`include \"constants.h\"")?;
        writeln!(out)?;
        writeln!(out, "module {}({ports});", self.module_name)?;
        if !ports.is_empty() {
            writeln!(out, "    output {ports};")?;
            writeln!(out, "    electrical {ports};")?;
        }
        writeln!(out)?;
        writeln!(out, "    parameter real vlow = {};", format_real(self.vlow))?;
        writeln!(out, "    parameter real vhigh = {};", format_real(self.vhigh))?;
        writeln!(out)?;

        let reals = self.real_vars();
        if !reals.is_empty() {
            writeln!(out, "    real {};", reals.join(", "))?;
        }
        let integers = self.integer_vars();
        if !integers.is_empty() {
            writeln!(out, "    integer {};", integers.join(", "))?;
        }
        if !reals.is_empty() || !integers.is_empty() {
            writeln!(out)?;
        }

        writeln!(out, "    analog begin")?;
        self.write_initial_block(out)?;
        for signal in &self.signals {
            match &signal.body {
                SignalBody::OneShot(chain) => {
                    writeln!(out, "    // {} : one-shot (then holds low)", signal.port)?;
                    write_chain(out, "$abstime", &signal.target, chain)?;
                }
                SignalBody::Periodic(p) => {
                    let period = format_real(p.period);
                    writeln!(out, "    // {} : periodic", signal.port)?;
                    writeln!(
                        out,
                        "    @(cross($abstime - ({} + 1) * {period} + {}, +1))",
                        p.counter,
                        format_real(CROSS_EPSILON)
                    )?;
                    writeln!(out, "        {0} = {0} + 1;", p.counter)?;
                    writeln!(out, "    {} = $abstime - {} * {period};", p.phase, p.counter)?;
                    write_chain(out, &p.phase, &signal.target, &p.chain)?;
                }
            }
            writeln!(out)?;
        }
        let edge = format_real(self.edge_time);
        for signal in &self.signals {
            writeln!(
                out,
                "    V({}) <+ transition({}, 0, {edge});",
                signal.port, signal.target
            )?;
        }
        writeln!(out, "    end")?;
        writeln!(out, "endmodule")
    }

    fn write_initial_block<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if self.signals.is_empty() {
            return Ok(());
        }
        writeln!(out, "    @(initial_step) begin")?;
        for signal in &self.signals {
            writeln!(
                out,
                "        {} = {};",
                signal.target,
                format_real(signal.initial_level)
            )?;
            if let SignalBody::Periodic(p) = &signal.body {
                writeln!(
                    out,
                    "        {} = floor($abstime / {});",
                    p.counter,
                    format_real(p.period)
                )?;
            }
        }
        writeln!(out, "    end")?;
        writeln!(out)
    }
}

fn write_chain<W: fmt::Write>(
    out: &mut W,
    time: &str,
    target: &str,
    chain: &LevelChain,
) -> fmt::Result {
    for (i, clause) in chain.clauses.iter().enumerate() {
        let keyword = if i == 0 { "if" } else { "else if" };
        writeln!(
            out,
            "    {keyword} ({time} < {}) {target} = {};",
            format_real(clause.before),
            format_real(clause.value)
        )?;
    }
    if chain.clauses.is_empty() {
        writeln!(out, "    {target} = {};", format_real(chain.otherwise))
    } else {
        writeln!(out, "    else {target} = {};", format_real(chain.otherwise))
    }
}

impl fmt::Display for CompiledModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_verilog_a(f)
    }
}
