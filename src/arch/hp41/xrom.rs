//! Names of functions provided by extension modules.
//!
//! Extension calls are encoded as a module number and a function number.
//! Only the modules that ship with (or are commonly paired with) the 41CX are
//! listed here; anything else is rendered as `XROM mm,ff`.

use std::collections::HashMap;

/// Extended functions, built into the CX.
static EXTENDED_FUNCTIONS: [&str; 47] = [
    "ALENG", "ANUM", "APPCHR", "APPREC", "ARCLREC", "AROT", "ATOX", "CLFL", "CLKEYS", "CRFLAS",
    "CRFLD", "DELCHR", "DELREC", "EMDIR", "FLSIZE", "GETAS", "GETKEY", "GETP", "GETR", "GETREC",
    "GETRX", "GETSUB", "GETX", "INSCHR", "INSREC", "PASN", "PCLPS", "POSA", "POSFL", "PSIZE",
    "PURFL", "RCLFLAG", "RCLPT", "RCLPTA", "REGMOVE", "REGSWAP", "SAVEAS", "SAVEP", "SAVER",
    "SAVERX", "SAVEX", "SEEKPT", "SEEKPTA", "SIZE?", "STOFLAG", "X<>F", "XTOA",
];

/// Time functions, built into the CX.
static TIME_FUNCTIONS: [&str; 33] = [
    "ALMCAT", "ALMNOW", "ATIME", "ATIME24", "CLK12", "CLK24", "CLKT", "CLKTD", "CLOCK",
    "CORRECT", "DATE", "DATE+", "DDAYS", "DMY", "DOW", "MDY", "RCLAF", "RCLSW", "RUNSW", "SETAF",
    "SETDATE", "SETIME", "SETSW", "STOPSW", "SW", "T+X", "TIME", "XYZALM", "CLALMA", "CLALMX",
    "CLRALMS", "RCLALM", "SWPT",
];

/// Optical wand.
static WAND_FUNCTIONS: [&str; 6] = ["WNDDTA", "WNDDTX", "WNDLNK", "WNDSCN", "WNDSUB", "WNDTST"];

/// Thermal printer.
static PRINTER_FUNCTIONS: [&str; 24] = [
    "ACA", "ACCHR", "ACCOL", "ACSPEC", "ACX", "BLDSPEC", "LIST", "PRA", "PRAXIS", "PRBUF",
    "PRFLAGS", "PRKEYS", "PRP", "PRPLOT", "PRPLOTP", "PRREG", "PRREGX", "PRΣ", "PRSTK", "PRX",
    "REGPLOT", "SKPCHR", "SKPCOL", "STKPLOT",
];

lazy_static! {
    static ref XROM_NAMES: HashMap<(u8, u8), &'static str> = {
        let mut names = HashMap::new();
        let modules: [(u8, &[&'static str]); 4] = [
            (25, &EXTENDED_FUNCTIONS),
            (26, &TIME_FUNCTIONS),
            (27, &WAND_FUNCTIONS),
            (29, &PRINTER_FUNCTIONS),
        ];

        for (module, functions) in modules.iter() {
            // Function 0 is the module's header, never called directly.
            for (index, name) in functions.iter().enumerate() {
                names.insert((*module, index as u8 + 1), *name);
            }
        }

        names
    };
}

/// Look up the name of an extension function.
pub fn lookup(module: u8, function: u8) -> Option<&'static str> {
    XROM_NAMES.get(&(module, function)).copied()
}
