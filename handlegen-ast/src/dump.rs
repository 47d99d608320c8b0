//! Serialized form of the AST written by the external header parser.
//!
//! ```json
//! {
//!   "units": [
//!     {
//!       "path": "/llvm/include/llvm-c/Core.h",
//!       "handles": [{ "name": "LLVMModuleRef", "line": 61 }],
//!       "functions": [{ "name": "LLVMModuleCreateWithName" }]
//!     }
//!   ]
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root of an AST dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AstDump {
    /// Translation units in parse order.
    #[serde(default)]
    pub units: Vec<UnitDump>,
}

impl AstDump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a translation unit.
    pub fn unit(mut self, unit: UnitDump) -> Self {
        self.units.push(unit);
        self
    }
}

/// One parsed header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitDump {
    pub path: PathBuf,
    #[serde(default)]
    pub handles: Vec<HandleDump>,
    #[serde(default)]
    pub functions: Vec<FunctionDump>,
}

impl UnitDump {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            handles: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Declare a handle typedef at `line`.
    pub fn handle(mut self, name: impl Into<String>, line: u32) -> Self {
        self.handles.push(HandleDump {
            name: name.into(),
            line,
        });
        self
    }

    /// Declare an exported function.
    pub fn function(self, name: impl Into<String>) -> Self {
        self.push_function(name, false, false)
    }

    /// Declare an inline function.
    pub fn inline_function(self, name: impl Into<String>) -> Self {
        self.push_function(name, true, false)
    }

    /// Declare a function the parser marked as ignored.
    pub fn ignored_function(self, name: impl Into<String>) -> Self {
        self.push_function(name, false, true)
    }

    fn push_function(mut self, name: impl Into<String>, inline: bool, ignored: bool) -> Self {
        self.functions.push(FunctionDump {
            name: name.into(),
            inline,
            ignored,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandleDump {
    pub name: String,
    #[serde(default)]
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionDump {
    pub name: String,
    #[serde(default)]
    pub inline: bool,
    #[serde(default)]
    pub ignored: bool,
}
