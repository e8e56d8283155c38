// File: crates/chart-core/src/downsample.rs
// Summary: Mean-based downsampling of a numeric series into a fixed number of buckets.
// Notes:
// - Buckets are contiguous and differ in size by at most one element.
// - Remainder is back-loaded: the last `n % count` buckets carry the extra element.

use crate::error::DownsampleError;

/// Lengths of the contiguous buckets `compress_by_mean` averages over.
///
/// For `n <= count` every element is its own bucket. Otherwise there are
/// exactly `count` buckets of `n / count` elements, the trailing `n % count`
/// of them one longer.
pub fn chunk_sizes(n: usize, count: usize) -> Result<Vec<usize>, DownsampleError> {
    if count == 0 {
        return Err(DownsampleError::InvalidCount);
    }
    if n <= count {
        return Ok(vec![1; n]);
    }
    let base = n / count;
    let first_long = count - n % count;
    Ok((0..count).map(|i| if i >= first_long { base + 1 } else { base }).collect())
}

/// Compress `values` to `count` points, each the arithmetic mean of one bucket.
///
/// Series no longer than `count` are returned unchanged (no upsampling), so an
/// empty input yields an empty output.
pub fn compress_by_mean(values: &[f64], count: usize) -> Result<Vec<f64>, DownsampleError> {
    if count == 0 {
        return Err(DownsampleError::InvalidCount);
    }
    if values.len() <= count {
        return Ok(values.to_vec());
    }

    let mut out = Vec::with_capacity(count);
    let mut start = 0usize;
    for size in chunk_sizes(values.len(), count)? {
        let bucket = &values[start..start + size];
        out.push(bucket.iter().sum::<f64>() / size as f64);
        start += size;
    }
    Ok(out)
}
