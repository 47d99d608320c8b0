use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use handlegen_ast::{AstDump, UnitDump};
use tempfile::TempDir;

const CONFIG: &str = r#"
library = "LibLLVM"

[[handle]]
name = "LLVMModuleRef"
template = "global"
disposer = "LLVMDisposeModule"

[[handle]]
name = "LLVMModuleRef"
template = "alias"
"#;

struct Fixture {
    _temp: TempDir,
    root: PathBuf,
}

impl Fixture {
    fn new(config: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let root = std::fs::canonicalize(temp.path()).unwrap();
        let llvm = root.join("llvm");
        let libllvm = root.join("libllvm");
        std::fs::create_dir_all(llvm.join("include/llvm-c")).unwrap();
        std::fs::create_dir_all(libllvm.join("include/libllvm-c")).unwrap();

        let dump = AstDump::new()
            .unit(
                UnitDump::new(llvm.join("include/llvm-c/Core.h"))
                    .handle("LLVMModuleRef", 61)
                    .handle("LLVMErrorRef", 34)
                    .handle("LLVMBarRef", 90)
                    .function("LLVMModuleCreateWithName")
                    .inline_function("LLVMInlineHelper"),
            )
            .unit(
                UnitDump::new(libllvm.join("include/libllvm-c/ValueBindings.h"))
                    .function("LibLLVMIsConstantZeroValue"),
            );
        std::fs::write(
            root.join("ast.json"),
            serde_json::to_string_pretty(&dump).unwrap(),
        )
        .unwrap();
        std::fs::write(root.join("handlegen.toml"), config).unwrap();

        Self { _temp: temp, root }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    fn run(&self, command: &str, extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_handlegen"))
            .current_dir(&self.root)
            .env_remove("RUST_LOG")
            .arg(command)
            .arg("-l")
            .arg(self.path("llvm"))
            .arg("-e")
            .arg(self.path("libllvm"))
            .args(["--ast", "ast.json"])
            .args(extra)
            .output()
            .unwrap()
    }

    /// Run from a sibling `work/` directory with every path given relative
    /// to it.
    fn run_from_sibling(&self, command: &str, extra: &[&str]) -> Output {
        let work = self.path("work");
        std::fs::create_dir_all(&work).unwrap();

        Command::new(env!("CARGO_BIN_EXE_handlegen"))
            .current_dir(&work)
            .env_remove("RUST_LOG")
            .arg(command)
            .args(["-l", "../llvm", "-e", "../libllvm"])
            .args(["--ast", "../ast.json", "-c", "../handlegen.toml"])
            .args(extra)
            .output()
            .unwrap()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn generate_exits_with_error_count() {
    let fixture = Fixture::new(CONFIG);

    let output = fixture.run("generate", &["-o", "out", "-d", "def/LibLLVM.def"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No mapping for handle type LLVMBarRef - llvm-c/Core.h@90"));
    assert!(!stderr.contains("LLVMErrorRef"));

    assert!(fixture.path("out/handles/llvm_module_ref.rs").exists());
    assert!(fixture.path("out/handles/llvm_module_ref_alias.rs").exists());
    let listing = read(&fixture.path("def/LibLLVM.def"));
    assert!(listing.ends_with(
        "LIBRARY LibLLVM\nEXPORTS\n    LLVMModuleCreateWithName\n    LibLLVMIsConstantZeroValue\n"
    ));
}

#[test]
fn relative_roots_with_parent_components_classify_exports() {
    let fixture = Fixture::new(CONFIG);

    let output = fixture.run_from_sibling("generate", &["-o", "out", "-d", "../LibLLVM.def"]);

    assert_eq!(output.status.code(), Some(1));
    let listing = read(&fixture.path("LibLLVM.def"));
    assert!(listing.ends_with(
        "LIBRARY LibLLVM\nEXPORTS\n    LLVMModuleCreateWithName\n    LibLLVMIsConstantZeroValue\n"
    ));
    assert!(fixture.path("work/out/handles/llvm_module_ref.rs").exists());
}

#[test]
fn generate_succeeds_when_every_handle_is_mapped() {
    let config = format!(
        "{}\n[[handle]]\nname = \"LLVMBarRef\"\ntemplate = \"context\"\n",
        CONFIG
    );
    let fixture = Fixture::new(&config);

    let output = fixture.run("generate", &["-o", "out"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(fixture.path("out/handles/llvm_bar_ref.rs").exists());
    assert!(!fixture.path("LibLLVM.def").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let fixture = Fixture::new(CONFIG);

    let output = fixture.run("generate", &["-o", "out", "--dry-run"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 files would be generated"));
    assert!(!fixture.path("out").exists());
}

#[test]
fn check_reports_without_writing() {
    let fixture = Fixture::new(CONFIG);

    let output = fixture.run("check", &["--exports"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrappers: 2"));
    assert!(stdout.contains("Exports: 2"));
    assert!(!fixture.path("handles").exists());
}

#[test]
fn invalid_roots_fail() {
    let fixture = Fixture::new(CONFIG);
    std::fs::remove_dir_all(fixture.path("libllvm/include")).unwrap();

    let output = fixture.run("generate", &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("extensions root does not contain an 'include' directory"));
}

#[test]
fn invalid_config_fails() {
    let fixture = Fixture::new("[[handle]]\nname = \"LLVMModuleRef\"\ntemplate = \"global\"\n");

    let output = fixture.run("check", &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no disposer"));
}
