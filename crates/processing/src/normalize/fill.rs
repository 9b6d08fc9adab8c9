use crate::schema::fill_policy::FillPolicy;
use model::core::value::Value;

pub fn apply(values: &mut [Value], policy: FillPolicy) {
    match policy {
        FillPolicy::None => {}
        FillPolicy::ForwardFill => forward_fill(values),
        FillPolicy::BackFill => back_fill(values),
        FillPolicy::MeanFill => mean_fill(values),
        FillPolicy::Interpolate => interpolate(values),
    }
}

pub fn forward_fill(values: &mut [Value]) {
    let mut last: Option<Value> = None;
    for value in values.iter_mut() {
        if !value.is_null() {
            last = Some(value.clone());
        } else if let Some(prev) = &last {
            *value = prev.clone();
        }
    }
}

pub fn back_fill(values: &mut [Value]) {
    let mut next: Option<Value> = None;
    for value in values.iter_mut().rev() {
        if !value.is_null() {
            next = Some(value.clone());
        } else if let Some(later) = &next {
            *value = later.clone();
        }
    }
}

/// The mean is taken once over the non-missing values; a column with no
/// numbers at all is left untouched.
pub fn mean_fill(values: &mut [Value]) {
    let (sum, count) = values
        .iter()
        .filter_map(Value::as_f64)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return;
    }
    let mean = sum / count as f64;
    for value in values.iter_mut().filter(|v| v.is_null()) {
        *value = Value::Number(mean);
    }
}

/// Linear interpolation by row position. Leading and trailing gaps have only
/// one neighbour and stay missing.
pub fn interpolate(values: &mut [Value]) {
    let mut previous: Option<(usize, f64)> = None;
    for i in 0..values.len() {
        let Some(current) = values[i].as_f64() else {
            continue;
        };
        if let Some((start, from)) = previous
            && i - start > 1
        {
            let span = (i - start) as f64;
            for (step, cell) in values[start + 1..i].iter_mut().enumerate() {
                let t = (step + 1) as f64 / span;
                *cell = Value::Number(from + (current - from) * t);
            }
        }
        previous = Some((i, current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(raw: &[Option<f64>]) -> Vec<Value> {
        raw.iter()
            .map(|v| v.map(Value::Number).unwrap_or(Value::Null))
            .collect()
    }

    #[test]
    fn test_interpolate_midpoint() {
        let mut values = nums(&[Some(1.0), None, Some(3.0)]);
        interpolate(&mut values);
        assert_eq!(values, nums(&[Some(1.0), Some(2.0), Some(3.0)]));
    }

    #[test]
    fn test_interpolate_longer_gap_and_open_ends() {
        let mut values = nums(&[None, Some(0.0), None, None, None, Some(8.0), None]);
        interpolate(&mut values);
        assert_eq!(
            values,
            nums(&[None, Some(0.0), Some(2.0), Some(4.0), Some(6.0), Some(8.0), None])
        );
    }

    #[test]
    fn test_mean_fill() {
        let mut values = nums(&[Some(10.0), None, Some(30.0)]);
        mean_fill(&mut values);
        assert_eq!(values, nums(&[Some(10.0), Some(20.0), Some(30.0)]));

        let mut empty = nums(&[None, None]);
        mean_fill(&mut empty);
        assert_eq!(empty, nums(&[None, None]));
    }

    #[test]
    fn test_forward_and_back_fill() {
        let mut forward = nums(&[None, Some(1.0), None, Some(4.0), None]);
        forward_fill(&mut forward);
        assert_eq!(
            forward,
            nums(&[None, Some(1.0), Some(1.0), Some(4.0), Some(4.0)])
        );

        let mut back = nums(&[None, Some(1.0), None, Some(4.0), None]);
        back_fill(&mut back);
        assert_eq!(back, nums(&[Some(1.0), Some(1.0), Some(4.0), Some(4.0), None]));
    }

    #[test]
    fn test_copy_fills_work_on_text() {
        let mut values = vec![Value::String("N".into()), Value::Null];
        apply(&mut values, FillPolicy::ForwardFill);
        assert_eq!(values[1], Value::String("N".into()));
    }
}
