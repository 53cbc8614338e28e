//! Layout checks keeping `tests/unit` a one-to-one mirror of the engine sources

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Harness roots and module declaration files carry no behaviour of their own
    fn is_structural(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|_| io::Error::other("path outside scanned root"))?;
                    found.insert(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }

        Ok(found)
    }

    fn mirror() -> (BTreeSet<String>, BTreeSet<String>) {
        let sources = rust_files(Path::new(SOURCE_ROOT)).unwrap_or_default();
        let units = rust_files(Path::new(UNIT_ROOT)).unwrap_or_default();
        assert!(!sources.is_empty(), "no engine sources found under {SOURCE_ROOT}");
        (sources, units)
    }

    // Tests every engine module has a unit test file at the same relative path
    // Verified by deleting tests/unit/resolve/cache.rs
    #[test]
    fn test_every_module_has_unit_tests() {
        let (sources, units) = mirror();
        let missing: Vec<_> = sources
            .iter()
            .filter(|path| !is_structural(path) && !units.contains(*path))
            .map(|path| format!("  - {SOURCE_ROOT}/{path} needs {UNIT_ROOT}/{path}"))
            .collect();

        assert!(missing.is_empty(), "untested modules:\n{}", missing.join("\n"));
    }

    // Tests no unit test file outlives the module it covers
    // Verified by adding tests/unit/math/interpolation.rs
    #[test]
    fn test_no_orphaned_unit_tests() {
        let (sources, units) = mirror();
        let orphans: Vec<_> = units
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_ROOT}/{path} has no {SOURCE_ROOT}/{path}"))
            .collect();

        assert!(orphans.is_empty(), "orphaned unit tests:\n{}", orphans.join("\n"));
    }

    // Tests each unit file defines tests and exercises the public crate API
    // Verified by emptying tests/unit/tissue/label.rs
    #[test]
    fn test_unit_files_exercise_the_crate() {
        let units = rust_files(Path::new(UNIT_ROOT)).unwrap_or_default();
        let mut hollow = Vec::new();

        for path in units.iter().filter(|path| !is_structural(path)) {
            let content = fs::read_to_string(Path::new(UNIT_ROOT).join(path)).unwrap_or_default();
            if !content.contains("#[test]") || !content.contains("nbp_params::") {
                hollow.push(format!("  - {UNIT_ROOT}/{path}"));
            }
        }

        assert!(
            hollow.is_empty(),
            "unit files without tests against nbp_params:\n{}",
            hollow.join("\n")
        );
    }
}
