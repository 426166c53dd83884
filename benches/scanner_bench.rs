use backupwacht::scanner::scan;
use backupwacht::types::ScanOptions;
use criterion::{criterion_group, criterion_main, Criterion};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

fn create_test_tree(depth: usize, files_per_dir: usize, dirs_per_level: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    fn create_level(
        path: &Path,
        current_depth: usize,
        max_depth: usize,
        files_per_dir: usize,
        dirs_per_level: usize,
    ) {
        if current_depth >= max_depth {
            return;
        }

        // Create files
        for i in 0..files_per_dir {
            let file_path = path.join(format!("file_{}.txt", i));
            fs::write(&file_path, format!("Test content {}", i)).unwrap();
        }

        // Create subdirectories
        for i in 0..dirs_per_level {
            let dir_path = path.join(format!("dir_{}", i));
            fs::create_dir(&dir_path).unwrap();
            create_level(dir_path.as_path(), current_depth + 1, max_depth, files_per_dir, dirs_per_level);
        }
    }

    create_level(temp_dir.path(), 0, depth, files_per_dir, dirs_per_level);
    temp_dir
}

fn benchmark_small_tree(c: &mut Criterion) {
    let temp_dir = create_test_tree(3, 10, 3);
    let root = temp_dir.path().to_path_buf();

    c.bench_function("scan_small_tree", |b| {
        b.iter(|| {
            let options = ScanOptions::default();
            black_box(scan(&root, &options))
        })
    });
}

fn benchmark_large_tree(c: &mut Criterion) {
    let temp_dir = create_test_tree(4, 20, 4);
    let root = temp_dir.path().to_path_buf();

    c.bench_function("scan_large_tree", |b| {
        b.iter(|| {
            let options = ScanOptions::default();
            black_box(scan(&root, &options))
        })
    });
}

fn benchmark_exclude_patterns(c: &mut Criterion) {
    let temp_dir = create_test_tree(3, 10, 3);
    let root = temp_dir.path().to_path_buf();

    let mut group = c.benchmark_group("exclude_patterns");

    group.bench_function("no_excludes", |b| {
        b.iter(|| {
            let options = ScanOptions::default();
            black_box(scan(&root, &options))
        })
    });

    group.bench_function("with_excludes", |b| {
        b.iter(|| {
            let options = ScanOptions {
                follow_symlinks: false,
                excludes: vec!["**/dir_1/**".to_string(), "**/file_5.txt".to_string()],
            };
            black_box(scan(&root, &options))
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_small_tree, benchmark_large_tree, benchmark_exclude_patterns);
criterion_main!(benches);
