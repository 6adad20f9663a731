use serde::Deserialize;

/// Body of the Sheets API `values` endpoint.
/// Tabs without any data come back without `values`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRangeResponse {
    #[allow(dead_code)]
    pub range: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_deserialize_a_value_range() {
        let dto = serde_json::from_str::<ValueRangeResponse>(
            r##"
              {
                "range": "'Event(new)'!A1:Z1000",
                "majorDimension": "ROWS",
                "values": [
                  ["Include", "Cost", "Title"],
                  ["Y", "Free", "Harbour Lights", "Music"]
                ]
              }"##,
        );

        assert!(dto.is_ok(), "{:?}", dto);

        let dto = dto.unwrap();

        assert_eq!(dto.values.len(), 2);
        assert_eq!(dto.values[1][2], "Harbour Lights");
    }

    #[test_log::test]
    fn should_deserialize_an_empty_tab() {
        let dto = serde_json::from_str::<ValueRangeResponse>(
            r##"{ "range": "'Exhibition(new)'!A1:Z1000", "majorDimension": "ROWS" }"##,
        )
        .unwrap();

        assert!(dto.values.is_empty());
    }
}
