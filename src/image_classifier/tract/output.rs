use crate::image_classifier::interface::Classification;

/// Model heads either emit logits or already-normalized probabilities.
pub fn to_probabilities(scores: &[f32]) -> Vec<f32> {
    let sum: f32 = scores.iter().sum();
    let is_distribution =
        scores.iter().all(|s| (0.0..=1.0).contains(s)) && (sum - 1.0).abs() < 0.01;
    if is_distribution {
        return scores.to_vec();
    }

    let max = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// Highest `top_k` probabilities with a label, best first. Outputs with one
/// more class than there are labels carry a leading background class.
pub fn top_k(probabilities: &[f32], labels: &[String], top_k: usize) -> Vec<Classification> {
    let offset = if probabilities.len() == labels.len() + 1 {
        1
    } else {
        0
    };

    let mut ranked: Vec<(usize, f32)> = probabilities
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(idx, &p)| (idx - offset, p))
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .filter_map(|(idx, confidence)| {
            labels
                .get(idx)
                .filter(|label| !label.is_empty())
                .map(|label| Classification {
                    label: label.clone(),
                    confidence: confidence.clamp(0.0, 1.0),
                })
        })
        .take(top_k)
        .collect()
}

pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}
