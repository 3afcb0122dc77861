//! End-to-end splitting of IDX files into archives.

use std::fs;
use std::path::Path;

use proptest::prelude::*;
use synviz_mnist::idx::{encode_images, encode_labels, IdxImages};
use synviz_mnist::*;

const ROWS: usize = 2;
const COLS: usize = 2;

fn write_split(dir: &Path, files: &SplitFiles, pixels: &[u8], labels: &[u8]) {
    let images = IdxImages {
        rows: ROWS,
        cols: COLS,
        pixels: pixels.to_vec(),
    };
    fs::write(dir.join(files.images), encode_images(&images)).unwrap();
    fs::write(dir.join(files.labels), encode_labels(labels)).unwrap();
}

fn samples(max: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop::collection::vec(0u8..10, 0..max).prop_flat_map(|labels| {
        let n = labels.len() * ROWS * COLS;
        (prop::collection::vec(any::<u8>(), n), Just(labels))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn counts_sum_and_pixels_in_range(
        (train_pixels, train_labels) in samples(40),
        (test_pixels, test_labels) in samples(20),
    ) {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_split(input.path(), &TRAIN, &train_pixels, &train_labels);
        write_split(input.path(), &TEST, &test_pixels, &test_labels);

        let options = SplitOptions {
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().join("mnist"),
            num_classes: NUM_CLASSES,
        };
        let summaries = split_all(&options).unwrap();
        prop_assert_eq!(summaries.len(), 2);
        prop_assert_eq!(summaries[0].total(), train_labels.len());
        prop_assert_eq!(summaries[1].total(), test_labels.len());

        for summary in &summaries {
            let partition = read_archive(&summary.path).unwrap();
            prop_assert_eq!(partition.classes.len(), NUM_CLASSES);
            prop_assert_eq!(partition.counts(), summary.counts.clone());
            prop_assert_eq!(partition.image_size, ROWS * COLS);
            for bucket in &partition.classes {
                prop_assert_eq!(bucket.images.len(), bucket.count() * ROWS * COLS);
                prop_assert!(bucket.labels.iter().all(|&l| l == bucket.label));
                prop_assert!(bucket.images.iter().all(|p| (0.0..=1.0).contains(p)));
            }
        }
    }
}

#[test]
fn archives_have_expected_names() {
    let input = tempfile::tempdir().unwrap();
    write_split(input.path(), &TRAIN, &[255; 8], &[1, 7]);
    write_split(input.path(), &TEST, &[0; 4], &[7]);

    let options = SplitOptions {
        input_dir: input.path().to_path_buf(),
        output_dir: input.path().join("out"),
        ..SplitOptions::default()
    };
    split_all(&options).unwrap();

    let train = read_archive(input.path().join("out/mnist_train_split.svz")).unwrap();
    assert_eq!(train.counts()[1], 1);
    assert_eq!(train.classes[7].images, vec![1.0; 4]);
    let test = read_archive(input.path().join("out/mnist_test_split.svz")).unwrap();
    assert_eq!(test.total(), 1);
}

#[test]
fn mismatched_counts_fail() {
    let input = tempfile::tempdir().unwrap();
    write_split(input.path(), &TRAIN, &[0; 8], &[1]);
    write_split(input.path(), &TEST, &[0; 4], &[1]);

    let options = SplitOptions {
        input_dir: input.path().to_path_buf(),
        output_dir: input.path().join("out"),
        ..SplitOptions::default()
    };
    assert!(matches!(
        split_all(&options).unwrap_err(),
        MnistError::CountMismatch {
            images: 2,
            labels: 1
        }
    ));
    assert!(!input.path().join("out/mnist_train_split.svz").exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = SplitOptions {
        input_dir: dir.path().join("absent"),
        output_dir: dir.path().join("out"),
        ..SplitOptions::default()
    };
    assert!(matches!(split_all(&options).unwrap_err(), MnistError::Io(_)));
}
