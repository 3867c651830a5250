//! Mapping of free-form labels to legal, unique Verilog-A identifiers.

use std::collections::HashSet;

/// Base name substituted for an empty label.
pub const DEFAULT_BASE: &str = "wave";

/// Prefix added to identifiers that would otherwise start with a digit.
pub const DIGIT_PREFIX: &str = "w_";

/// Identifiers a label must never become: every Verilog-AMS keyword, the
/// natures, disciplines and access functions of `discipline.h`, and the
/// parameters the emitted module declares. A label that sanitizes to one of
/// these receives a numeric suffix instead.
pub const RESERVED: &[&str] = &[
    // Verilog-AMS keywords.
    "above", "abs", "absdelay", "absdelta", "abstol", "access", "acos", "acosh",
    "ac_stim", "aliasparam", "always", "analog", "analysis", "and", "asin", "asinh",
    "assert", "assign", "atan", "atan2", "atanh", "automatic", "begin", "branch",
    "buf", "bufif0", "bufif1", "case", "casex", "casez", "ceil", "cell", "cmos",
    "config", "connect", "connectmodule", "connectrules", "continuous", "cos",
    "cosh", "cross", "ddt", "ddt_nature", "ddx", "deassign", "default", "defparam",
    "design", "disable", "discipline", "discrete", "domain", "driver_update",
    "edge", "else", "end", "endcase", "endconfig", "endconnectrules",
    "enddiscipline", "endfunction", "endgenerate", "endmodule", "endnature",
    "endparamset", "endprimitive", "endspecify", "endtable", "endtask", "event",
    "exclude", "exp", "final_step", "flicker_noise", "floor", "flow", "for",
    "force", "forever", "fork", "from", "function", "generate", "genvar", "ground",
    "highz0", "highz1", "hypot", "idt", "idtmod", "idt_nature", "if", "ifnone",
    "incdir", "include", "inf", "initial", "initial_step", "inout", "input",
    "instance", "integer", "join", "laplace_nd", "laplace_np", "laplace_zd",
    "laplace_zp", "large", "last_crossing", "liblist", "library", "limexp", "ln",
    "localparam", "log", "macromodule", "max", "medium", "merged", "min", "module",
    "nand", "nature", "negedge", "net_resolution", "nmos", "noise_table",
    "noise_table_log", "nor", "noshowcancelled", "not", "notif0", "notif1", "or",
    "output", "parameter", "paramset", "pmos", "posedge", "potential", "pow",
    "primitive", "pull0", "pull1", "pulldown", "pullup", "pulsestyle_ondetect",
    "pulsestyle_onevent", "rcmos", "real", "realtime", "reg", "release", "repeat",
    "resolveto", "rnmos", "rpmos", "rtran", "rtranif0", "rtranif1", "scalared",
    "showcancelled", "signed", "sin", "sinh", "slew", "small", "specify",
    "specparam", "split", "sqrt", "string", "strong0", "strong1", "supply0",
    "supply1", "table", "tan", "tanh", "task", "time", "timer", "tran", "tranif0",
    "tranif1", "transition", "tri", "tri0", "tri1", "triand", "trior", "trireg",
    "units", "unsigned", "use", "uwire", "vectored", "wait", "wand", "weak0",
    "weak1", "while", "white_noise", "wire", "wor", "wreal", "xnor", "xor",
    "zi_nd", "zi_np", "zi_zd", "zi_zp",
    // discipline.h natures.
    "Current", "Charge", "Voltage", "Flux", "Temperature", "Power", "Position",
    "Velocity", "Acceleration", "Impulse", "Force", "Angle", "Angular_Velocity",
    "Angular_Acceleration", "Angular_Force", "Magneto_Motive_Force",
    // discipline.h disciplines.
    "logic", "ddiscrete", "electrical", "voltage", "current", "magnetic",
    "thermal", "kinematic", "kinematic_v", "rotational", "rotational_omega",
    // discipline.h access functions.
    "I", "Q", "V", "Phi", "Temp", "Pwr", "Pos", "Vel", "Acc", "Imp", "F", "Theta",
    "Omega", "Alpha", "Tau", "MMF",
    // Module parameters.
    "vlow", "vhigh",
];

/// Maps a label to a legal identifier without checking uniqueness.
///
/// Whitespace is trimmed, an empty label becomes [`DEFAULT_BASE`], every
/// character outside `[A-Za-z0-9_]` becomes `_`, and a leading digit is
/// prefixed with [`DIGIT_PREFIX`].
pub fn sanitize_identifier(label: &str) -> String {
    let trimmed = label.trim();
    let base = if trimmed.is_empty() {
        DEFAULT_BASE
    } else {
        trimmed
    };

    let ident: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{DIGIT_PREFIX}{ident}")
    } else {
        ident
    }
}

/// Issues sanitized identifiers, resolving collisions in call order.
///
/// On a collision the first free suffix `_1`, `_2`, ... is appended. The
/// result depends only on the order of [`IdentAllocator::issue`] calls.
#[derive(Debug, Clone, Default)]
pub struct IdentAllocator {
    used: HashSet<String>,
}

impl IdentAllocator {
    /// Creates an allocator with nothing reserved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator pre-seeded with [`RESERVED`].
    pub fn with_reserved() -> Self {
        let mut alloc = Self::new();
        alloc.reserve(RESERVED.iter().copied());
        alloc
    }

    /// Marks identifiers as taken without issuing them.
    pub fn reserve<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.used.extend(names.into_iter().map(str::to_string));
    }

    /// Returns whether `name` has been issued or reserved.
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Sanitizes `label` and returns a fresh identifier for it.
    pub fn issue(&mut self, label: &str) -> String {
        let base = sanitize_identifier(label);
        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.is_used(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}
