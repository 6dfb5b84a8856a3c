//! End-to-end tests for the detect-and-remove loop on realistic batches.

use approx::assert_relative_eq;
use grubbs_filter::{
    critical_value, filtered_mean, ConfidenceLevel, Error, FilterOutcome, GrubbsFilter,
    MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT,
};

// Eight readings around 5.4 with two spurious values mixed in.
const SPIKED_BATCH: [f32; 8] = [8.2, 5.4, 5.0, 5.2, 15.1, 5.3, 5.5, 6.0];

// Tight cluster plus a pair of comparable spikes. The spikes inflate the
// standard deviation enough to shield each other at strict levels.
const MASKED_BATCH: [f32; 10] = [10.0, 10.1, 10.2, 10.3, 10.4, 10.5, 10.6, 10.7, 50.0, 51.0];

fn rejected_values(outcome: &FilterOutcome<f32>) -> Vec<f32> {
    outcome.rejections().iter().map(|r| r.value).collect()
}

#[test]
fn test_spiked_batch_recovers_cluster_mean() {
    let outcome = GrubbsFilter::new(ConfidenceLevel::P95)
        .process(&SPIKED_BATCH)
        .unwrap();

    // 15.1 falls first, which exposes 8.2 on the recomputed statistics.
    assert_eq!(rejected_values(&outcome), vec![15.1, 8.2]);
    assert_relative_eq!(outcome.mean(), 5.4, epsilon = 1e-3);
    assert_eq!(outcome.retained(), &[5.0, 5.2, 5.3, 5.4, 5.5, 6.0]);
    assert_eq!(outcome.input_count(), 8);
    assert!(!outcome.is_clean());
}

#[test]
fn test_rejection_records_describe_each_round() {
    let outcome = GrubbsFilter::new(ConfidenceLevel::P95)
        .process(&SPIKED_BATCH)
        .unwrap();
    let rejections = outcome.rejections();
    assert_eq!(rejections.len(), 2);

    // First round ran over all eight samples, the second over seven.
    assert_eq!(rejections[0].sample_count, 8);
    assert_eq!(
        rejections[0].critical,
        critical_value(ConfidenceLevel::P95, 8).unwrap() as f32
    );
    assert_eq!(rejections[1].sample_count, 7);
    assert_eq!(
        rejections[1].critical,
        critical_value(ConfidenceLevel::P95, 7).unwrap() as f32
    );
    for rejection in rejections {
        assert!(rejection.statistic > rejection.critical);
    }
}

#[test]
fn test_all_equal_batch_passes_through() {
    let outcome = GrubbsFilter::new(ConfidenceLevel::P95)
        .process(&[5.0f32; 5])
        .unwrap();
    assert!(outcome.is_clean());
    assert_eq!(outcome.mean(), 5.0);
    assert_eq!(outcome.retained_count(), 5);
}

#[test]
fn test_clean_batch_mean_matches_arithmetic_mean() {
    let samples = [5.0f32, 5.0, 5.1, 5.2, 5.2];
    let arithmetic = samples.iter().sum::<f32>() / samples.len() as f32;

    for level in ConfidenceLevel::ALL {
        let outcome = GrubbsFilter::new(level).process(&samples).unwrap();
        assert!(outcome.is_clean(), "no outlier to find at {level}");
        assert_relative_eq!(outcome.mean(), arithmetic, epsilon = 1e-6);
    }
}

#[test]
fn test_underfull_and_overfull_batches_fail() {
    let filter = GrubbsFilter::new(ConfidenceLevel::P95);

    assert_eq!(filter.process::<f32>(&[]), Err(Error::sample_count(0)));
    assert_eq!(filter.process(&[4.2f32, 4.3]), Err(Error::sample_count(2)));
    assert_eq!(filter.process(&[1.0f32; 21]), Err(Error::sample_count(21)));

    // The constructor is part of the public surface and must agree with the
    // variant callers can match on.
    assert_eq!(
        Error::sample_count(2),
        Error::SampleCountOutOfRange {
            actual: 2,
            min: MIN_SAMPLE_COUNT,
            max: MAX_SAMPLE_COUNT,
        }
    );
}

#[test]
fn test_every_supported_count_succeeds() {
    for count in 3..=20 {
        let samples = vec![7.0f32; count];
        let outcome = GrubbsFilter::default().process(&samples).unwrap();
        assert_eq!(outcome.mean(), 7.0);
        assert_eq!(outcome.retained_count(), count);
    }
}

#[test]
fn test_masked_spikes_survive_strict_levels() {
    for level in [ConfidenceLevel::P99, ConfidenceLevel::P95, ConfidenceLevel::P90] {
        let outcome = GrubbsFilter::new(level).process(&MASKED_BATCH).unwrap();
        assert!(outcome.is_clean(), "spikes mask each other at {level}");
        assert_relative_eq!(outcome.mean(), 18.38, epsilon = 1e-3);
    }
}

#[test]
fn test_lenient_level_unmasks_paired_spikes() {
    let outcome = GrubbsFilter::new(ConfidenceLevel::P80)
        .process(&MASKED_BATCH)
        .unwrap();

    // The ascending scan reaches 50.0 before 51.0 even though 51.0 deviates
    // more; removing it then leaves 51.0 fully exposed.
    assert_eq!(rejected_values(&outcome), vec![50.0, 51.0]);
    assert_relative_eq!(outcome.mean(), 10.35, epsilon = 1e-4);
    assert_eq!(outcome.retained_count(), 8);
}

#[test]
fn test_full_batch_with_one_spike() {
    let mut samples: Vec<f32> = (0..19).map(|i| 10.0 + 0.1 * i as f32).collect();
    samples.push(100.0);

    let outcome = GrubbsFilter::new(ConfidenceLevel::P95)
        .process(&samples)
        .unwrap();
    assert_eq!(rejected_values(&outcome), vec![100.0]);
    assert_eq!(outcome.retained_count(), 19);
    assert_relative_eq!(outcome.mean(), 10.9, epsilon = 1e-4);
}

#[test]
fn test_input_order_does_not_matter() {
    let filter = GrubbsFilter::new(ConfidenceLevel::P95);
    let baseline = filter.process(&SPIKED_BATCH).unwrap();

    let mut reversed = SPIKED_BATCH;
    reversed.reverse();
    assert_eq!(filter.process(&reversed).unwrap(), baseline);

    let shuffled = [5.3f32, 15.1, 5.0, 6.0, 8.2, 5.5, 5.2, 5.4];
    assert_eq!(filter.process(&shuffled).unwrap(), baseline);
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let filter = GrubbsFilter::new(ConfidenceLevel::P80);
    let first = filter.process(&MASKED_BATCH).unwrap();
    let second = filter.process(&MASKED_BATCH).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_retained_and_rejected_partition_the_input() {
    for level in ConfidenceLevel::ALL {
        for samples in [&SPIKED_BATCH[..], &MASKED_BATCH[..]] {
            let outcome = GrubbsFilter::new(level).process(samples).unwrap();
            assert_eq!(
                outcome.retained_count() + outcome.rejection_count(),
                samples.len()
            );
            assert_eq!(outcome.input_count(), samples.len());
        }
    }
}

#[test]
fn test_non_finite_input_is_reported_with_index() {
    let mut samples = SPIKED_BATCH;
    samples[4] = f32::NAN;
    assert_eq!(
        GrubbsFilter::default().process(&samples),
        Err(Error::NonFiniteSample { index: 4 })
    );
}

#[test]
fn test_default_filter_uses_lenient_level() {
    let outcome = GrubbsFilter::default().process(&MASKED_BATCH).unwrap();
    assert_eq!(rejected_values(&outcome), vec![50.0, 51.0]);
    assert_eq!(
        filtered_mean(&MASKED_BATCH, ConfidenceLevel::P80),
        Ok(outcome.mean())
    );
}

#[test]
fn test_f64_batches_reject_the_same_samples() {
    // The masked batch with the same decimal values, written as f64
    // literals: widening the f32 constants instead would drag their
    // representation error into the survivor mean.
    let samples = [
        10.0f64, 10.1, 10.2, 10.3, 10.4, 10.5, 10.6, 10.7, 50.0, 51.0,
    ];
    let outcome = GrubbsFilter::new(ConfidenceLevel::P80)
        .process(&samples)
        .unwrap();
    let rejected: Vec<f64> = outcome.rejections().iter().map(|r| r.value).collect();
    assert_eq!(rejected, vec![50.0, 51.0]);
    assert_relative_eq!(outcome.mean(), 10.35, epsilon = 1e-9);
}

#[test]
fn test_outcome_display_summarizes_batch() {
    let outcome = GrubbsFilter::new(ConfidenceLevel::P95)
        .process(&SPIKED_BATCH)
        .unwrap();
    assert_eq!(
        outcome.to_string(),
        "mean 5.400 (6 of 8 samples retained)"
    );
}
