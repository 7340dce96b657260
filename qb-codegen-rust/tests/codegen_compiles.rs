//! Integration tests that verify generated builders compile.
//!
//! Each test lowers a manifest, writes the generated module into a scratch
//! crate that depends on `quickbuilder-engine` by path, and runs
//! `cargo check` on it.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use quickbuilder_codegen::pipeline::Pipeline;
use quickbuilder_codegen_rust::Generator;
use quickbuilder_core::{DeclaredType, GeneratedFile};
use quickbuilder_ir::{BuilderContract, ModuleIR, ModuleMeta, PropertyDescriptor};
use quickbuilder_manifest::Manifest;
use tempfile::TempDir;

fn engine_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../qb-engine")
}

fn scratch_manifest() -> String {
    format!(
        r#"[package]
name = "generated-builders-check"
version = "0.0.0"
edition = "2024"
publish = false

[dependencies]
quickbuilder-engine = {{ path = '{}' }}

[workspace]
"#,
        engine_path().display()
    )
}

/// Generate `src/builders.rs` from a manifest next to the hand-written
/// `lib_rs` and verify the crate passes `cargo check`.
fn assert_generated_code_compiles(manifest_toml: &str, lib_rs: &str) {
    let manifest: Manifest = manifest_toml.parse().expect("Failed to parse manifest");
    let mut ctx = Pipeline::new().run(manifest).expect("Failed to lower manifest");
    let ir = ctx.take_ir().expect("Pipeline produced no IR");
    assert_ir_compiles(&ir, lib_rs);
}

/// Like [`assert_generated_code_compiles`], for IR built in code.
fn assert_ir_compiles(ir: &ModuleIR, lib_rs: &str) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let crate_dir = temp_dir.path();
    std::fs::create_dir_all(crate_dir.join("src")).expect("Failed to create src dir");
    std::fs::write(crate_dir.join("Cargo.toml"), scratch_manifest())
        .expect("Failed to write Cargo.toml");
    std::fs::write(crate_dir.join("src/lib.rs"), lib_rs).expect("Failed to write lib.rs");

    Generator::new(ir)
        .file("src/builders.rs")
        .write(crate_dir)
        .expect("Failed to generate code");

    // Share one target dir so the engine is only compiled once.
    let target_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("codegen_compiles");
    let status = Command::new(env!("CARGO"))
        .args(["check", "--message-format=short"])
        .env("CARGO_TARGET_DIR", target_dir)
        .current_dir(crate_dir)
        .output()
        .expect("Failed to run cargo check");

    if !status.status.success() {
        let stdout = String::from_utf8_lossy(&status.stdout);
        let stderr = String::from_utf8_lossy(&status.stderr);

        eprintln!("\n=== Generated files ===");
        print_generated_files(crate_dir);

        panic!(
            "Generated code failed to compile!\n\nstdout:\n{}\n\nstderr:\n{}",
            stdout, stderr
        );
    }
}

/// Print the scratch crate's sources for debugging.
fn print_generated_files(dir: &Path) {
    fn print_dir(dir: &Path, indent: usize) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == "target" {
                continue;
            }

            if path.is_dir() {
                eprintln!("{:indent$}{}/", "", name, indent = indent);
                print_dir(&path, indent + 2);
            } else if path.extension().is_some_and(|e| e == "rs" || e == "toml") {
                eprintln!("{:indent$}{}", "", name, indent = indent);
                if let Ok(content) = std::fs::read_to_string(&path) {
                    for line in content.lines() {
                        eprintln!("{:indent$}  | {}", "", line, indent = indent);
                    }
                }
            }
        }
    }
    print_dir(dir, 0);
}

const ORCHARD_MANIFEST: &str = r#"
[module]
name = "orchard"

[[builder]]
name = "Seed"
built = "crate::fruit::Seed"

[[builder.property]]
name = "size"
type = "short"

[[builder]]
name = "Fruit"
built = "crate::fruit::Fruit"

[[builder.property]]
name = "name"
type = "String"

[[builder.property]]
name = "weight"
type = "int"
setter = "put_weight"

[[builder.property]]
name = "seed"
type = "crate::fruit::Seed"
builder = true

[[builder.property]]
name = "ripeness"
type = "double"
setter = false

[[builder]]
name = "Orchard"
built = "crate::orchard::Orchard"
default_constructor = false
generator = "crate::orchard::plant"

[[builder.property]]
name = "rows"
type = "int"

[[builder.property]]
name = "fruit"
type = "crate::fruit::Fruit"
builder = true
"#;

const ORCHARD_LIB: &str = r#"
pub mod builders;

pub mod fruit {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Seed {
        pub size: i16,
    }

    impl Seed {
        pub fn set_size(&mut self, size: i16) {
            self.size = size;
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Fruit {
        pub name: String,
        pub weight: i32,
        pub seed: Option<Seed>,
        pub ripeness: f64,
    }

    impl Fruit {
        pub fn set_name(&mut self, name: String) {
            self.name = name;
        }

        pub fn put_weight(&mut self, weight: i32) {
            self.weight = weight;
        }

        pub fn set_seed(&mut self, seed: Seed) {
            self.seed = Some(seed);
        }
    }
}

pub mod orchard {
    use quickbuilder_engine::{Provider, Result};

    use crate::{builders::OrchardBuilder, fruit::Fruit};

    #[derive(Debug)]
    pub struct Orchard {
        pub rows: i32,
        pub fruit: Vec<Fruit>,
    }

    pub fn plant(builder: &OrchardBuilder) -> Result<Orchard> {
        Ok(Orchard {
            rows: builder._rows()?,
            fruit: Vec::new(),
        })
    }

    pub fn harvest(provider: &dyn Provider<Fruit>) -> Result<Fruit> {
        provider.build()
    }
}

pub fn plum_orchard() -> quickbuilder_engine::Result<orchard::Orchard> {
    use std::sync::Arc;

    use builders::{FruitBuilder, OrchardBuilder, SeedBuilder};
    use quickbuilder_engine::SharedProvider;

    let seed = SeedBuilder::new().with_size(3i16);
    let plum = FruitBuilder::new()
        .with_name("plum")
        .with_weight(40)
        .with_seed(Arc::new(seed));
    let _ripeness = plum._ripeness();
    let _plum = orchard::harvest(&plum)?;

    let fruit: SharedProvider<fruit::Fruit> = Arc::new(plum.but());
    OrchardBuilder::new().with_rows(12).with_fruit(fruit).build()
}
"#;

#[test]
fn test_orchard_builders_compile() {
    assert_generated_code_compiles(ORCHARD_MANIFEST, ORCHARD_LIB);
}

#[test]
fn test_reserved_and_colliding_names_compile() {
    // Keywords never pass manifest validation, so build the IR directly.
    let string = || DeclaredType::reference("String");
    let label = BuilderContract::new("Label", "crate::Label")
        .property(PropertyDescriptor::new("type", string()).setter("set_kind"))
        .unwrap()
        .property(PropertyDescriptor::new("generator", string()))
        .unwrap();
    let mut ir = ModuleIR::new(ModuleMeta {
        name: "labels".into(),
        version: "0.1.0".into(),
        description: None,
    });
    ir.push(label).unwrap();

    assert_ir_compiles(
        &ir,
        r#"
pub mod builders;

#[derive(Debug, Default)]
pub struct Label {
    pub kind: String,
    pub generator: String,
}

impl Label {
    pub fn set_kind(&mut self, kind: String) {
        self.kind = kind;
    }

    pub fn set_generator(&mut self, generator: String) {
        self.generator = generator;
    }
}

pub fn label() -> quickbuilder_engine::Result<Label> {
    let builder = builders::LabelBuilder::new()
        .with_type("fruit")
        .with_generator("orchard");
    let _kind: String = builder._type()?;
    builder.build()
}
"#,
    );
}

#[test]
fn test_many_properties_compile() {
    assert_generated_code_compiles(
        r#"
[module]
name = "parcels"

[[builder]]
name = "Parcel"
built = "crate::Parcel"

[[builder.property]]
name = "width"
type = "int"

[[builder.property]]
name = "height"
type = "int"

[[builder.property]]
name = "depth"
type = "int"

[[builder.property]]
name = "weight"
type = "long"

[[builder.property]]
name = "fragile"
type = "boolean"

[[builder.property]]
name = "label"
type = "char"

[[builder.property]]
name = "grade"
type = "byte"

[[builder.property]]
name = "price"
type = "float"
setter = false
"#,
        r#"
pub mod builders;

#[derive(Debug, Default)]
pub struct Parcel {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub weight: i64,
    pub fragile: bool,
    pub label: char,
    pub grade: i8,
}

impl Parcel {
    pub fn set_width(&mut self, v: i32) { self.width = v; }
    pub fn set_height(&mut self, v: i32) { self.height = v; }
    pub fn set_depth(&mut self, v: i32) { self.depth = v; }
    pub fn set_weight(&mut self, v: i64) { self.weight = v; }
    pub fn set_fragile(&mut self, v: bool) { self.fragile = v; }
    pub fn set_label(&mut self, v: char) { self.label = v; }
    pub fn set_grade(&mut self, v: i8) { self.grade = v; }
}
"#,
    );
}
