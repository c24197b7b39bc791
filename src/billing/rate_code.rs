use serde_json::Value;

use crate::billing::types::RateCodeHit;

const RATE_CODE_KEY: &str = "rateCode";
const DESCRIPTION_KEY: &str = "description";

/// Depth-first search of a pricing document for the first node carrying both
/// a `rateCode` and a `description`.
///
/// Each object node is inspected before its children, so a pair on the node
/// itself wins over any pair deeper in the structure. Scalars and arrays
/// never carry the pair and end their branch. Returns `None` when no node in
/// the document has the pair; the caller decides how to surface that.
pub fn find_rate_code(document: &Value) -> Option<RateCodeHit> {
    walk(document, "")
}

fn walk(node: &Value, path: &str) -> Option<RateCodeHit> {
    match node {
        Value::Object(map) => {
            if let (Some(rate_code), Some(description)) = (
                map.get(RATE_CODE_KEY).and_then(Value::as_str),
                map.get(DESCRIPTION_KEY).and_then(Value::as_str),
            ) {
                if !rate_code.is_empty() {
                    return Some(RateCodeHit {
                        rate_code: rate_code.to_string(),
                        description: description.to_string(),
                        path: path.to_string(),
                    });
                }
            }

            for (key, value) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                if let Some(hit) = walk(value, &child_path) {
                    return Some(hit);
                }
            }

            None
        }
        // Scalars and arrays never carry the pair
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pair_at_root_wins_without_descending() {
        let doc = json!({
            "rateCode": "ABCDEF.GHIJKL.MNOPQR",
            "description": "$0.25 per WriteRequestUnit",
            "nested": {
                "rateCode": "DEEPER.CODE.HERE",
                "description": "should never be reached"
            }
        });

        let hit = find_rate_code(&doc).unwrap();
        assert_eq!(hit.rate_code, "ABCDEF.GHIJKL.MNOPQR");
        assert_eq!(hit.description, "$0.25 per WriteRequestUnit");
        assert_eq!(hit.path, "");
    }

    #[test]
    fn test_shallow_pair_wins_over_deeper_sibling() {
        // "a" sorts before "z", so the depth-1 pair under "a" is found before
        // the depth-2 pair under "z".
        let doc = json!({
            "a": {
                "rateCode": "SHALLOW.CODE",
                "description": "shallow"
            },
            "z": {
                "inner": {
                    "rateCode": "DEEP.CODE",
                    "description": "deep"
                }
            }
        });

        let hit = find_rate_code(&doc).unwrap();
        assert_eq!(hit.rate_code, "SHALLOW.CODE");
        assert_eq!(hit.path, "a");
    }

    #[test]
    fn test_pair_found_in_on_demand_shape() {
        // Shape of a real terms.OnDemand subtree from the pricing catalog.
        let doc = json!({
            "TERM1.JRTCKXETXF": {
                "priceDimensions": {
                    "TERM1.JRTCKXETXF.6YS6EN2CT7": {
                        "unit": "WriteRequestUnits",
                        "endRange": "Inf",
                        "description": "$1.25 per million write request units",
                        "rateCode": "TERM1.JRTCKXETXF.6YS6EN2CT7",
                        "pricePerUnit": { "USD": "0.00000125" }
                    }
                },
                "sku": "TERM1",
                "effectiveDate": "2024-04-01T00:00:00Z",
                "offerTermCode": "JRTCKXETXF",
                "termAttributes": {}
            }
        });

        let hit = find_rate_code(&doc).unwrap();
        assert_eq!(hit.rate_code, "TERM1.JRTCKXETXF.6YS6EN2CT7");
        assert_eq!(
            hit.path,
            "TERM1.JRTCKXETXF.priceDimensions.TERM1.JRTCKXETXF.6YS6EN2CT7"
        );
    }

    #[test]
    fn test_first_branch_searched_fully_before_next_sibling() {
        // Depth-first: the pair three levels down under "a" wins over the
        // shallower pair under the later sibling "b".
        let doc = json!({
            "a": {
                "x": {
                    "y": {
                        "rateCode": "DEEP.FIRST.BRANCH",
                        "description": "found before b"
                    }
                }
            },
            "b": {
                "rateCode": "SHALLOW.LATER.BRANCH",
                "description": "never reached"
            }
        });

        let hit = find_rate_code(&doc).unwrap();
        assert_eq!(hit.rate_code, "DEEP.FIRST.BRANCH");
        assert_eq!(hit.path, "a.x.y");
    }

    #[test]
    fn test_empty_rate_code_string_treated_as_absent() {
        let doc = json!({
            "rateCode": "",
            "description": "empty code does not count",
            "nested": {
                "rateCode": "REAL.CODE",
                "description": "first non-empty pair"
            }
        });

        let hit = find_rate_code(&doc).unwrap();
        assert_eq!(hit.rate_code, "REAL.CODE");
        assert_eq!(hit.path, "nested");
    }

    #[test]
    fn test_no_pair_yields_none() {
        let doc = json!({
            "sku": "ABCDEF",
            "attributes": {
                "usagetype": "WriteRequestUnits",
                "operation": "PayPerRequestThroughput"
            }
        });

        assert!(find_rate_code(&doc).is_none());
    }

    #[test]
    fn test_rate_code_without_description_is_not_a_pair() {
        let doc = json!({
            "rateCode": "LONELY.CODE",
            "nested": {
                "rateCode": "FULL.PAIR",
                "description": "has both fields"
            }
        });

        let hit = find_rate_code(&doc).unwrap();
        assert_eq!(hit.rate_code, "FULL.PAIR");
        assert_eq!(hit.path, "nested");
    }

    #[test]
    fn test_arrays_and_scalars_yield_nothing() {
        let doc = json!([
            { "rateCode": "IN.ARRAY", "description": "unreachable" }
        ]);
        assert!(find_rate_code(&doc).is_none());

        let doc = json!("just a string");
        assert!(find_rate_code(&doc).is_none());

        let doc = json!({
            "list": [ { "rateCode": "X", "description": "y" } ],
            "scalar": 42
        });
        assert!(find_rate_code(&doc).is_none());
    }
}
