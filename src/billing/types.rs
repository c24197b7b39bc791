/// One billable usage dimension from a workload estimate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageLine {
    pub service_code: String,
    pub usage_type: String,
    /// Empty when the usage type has no operation qualifier
    pub operation: String,
}

/// First rate code found in a pricing document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCodeHit {
    pub rate_code: String,
    pub description: String,
    /// Dotted key path to the node that carried the pair, kept for diagnostics
    pub path: String,
}

/// One flattened record appended to the output store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub service_code: String,
    pub usage_type: String,
    pub operation: String,
    pub rate_code: String,
    pub description: String,
}

impl OutputRow {
    pub fn new(line: &UsageLine, hit: &RateCodeHit) -> Self {
        Self {
            service_code: line.service_code.clone(),
            usage_type: line.usage_type.clone(),
            operation: line.operation.clone(),
            rate_code: hit.rate_code.clone(),
            description: hit.description.clone(),
        }
    }
}
