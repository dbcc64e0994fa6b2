/// Test fixtures: representative JSON payloads from the EA flood-monitoring
/// measures API.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parser. They reflect the real linked-data envelope
/// returned by:
///   http://environment.data.gov.uk/flood-monitoring/id/stations/{id}/measures
///
/// Measures response shape:
///   response.items[]
///     .period                   — measurement period in seconds (number)
///     .latestReading.dateTime   — "YYYY-MM-DDTHH:MM:SSZ" (string)
///     .latestReading.value      — water level in metres (number)
///     .unitName, .qualifier, .parameter, "@id", … — metadata we ignore
///
/// Note: the upstream publishes readings in irregular batches; the same
/// latestReading can be served unchanged for six hours or more. Parsers see
/// duplicates as a matter of course.

/// Single level measure for station 53125: 1.234 m at noon, 15-minute period.
#[cfg(test)]
pub(crate) fn fixture_station_measures_json() -> &'static str {
    r#"{
      "@context": "http://environment.data.gov.uk/flood-monitoring/meta/context.jsonld",
      "meta": {
        "publisher": "Environment Agency",
        "licence": "http://www.nationalarchives.gov.uk/doc/open-government-licence/version/3/"
      },
      "items": [
        {
          "@id": "http://environment.data.gov.uk/flood-monitoring/id/measures/53125-level-stage-i-15_min-m",
          "label": "Riverton - level-stage-i-15_min-m",
          "latestReading": {
            "@id": "http://environment.data.gov.uk/flood-monitoring/data/readings/53125-level-stage-i-15_min-m/2024-01-01T12-00-00Z",
            "date": "2024-01-01",
            "dateTime": "2024-01-01T12:00:00Z",
            "measure": "http://environment.data.gov.uk/flood-monitoring/id/measures/53125-level-stage-i-15_min-m",
            "value": 1.234
          },
          "notation": "53125-level-stage-i-15_min-m",
          "parameter": "level",
          "parameterName": "Water Level",
          "period": 900,
          "qualifier": "Stage",
          "station": "http://environment.data.gov.uk/flood-monitoring/id/stations/53125",
          "stationReference": "53125",
          "unit": "http://qudt.org/1.1/vocab/unit#Meter",
          "unitName": "m",
          "valueType": "instantaneous"
        }
      ]
    }"#
}

/// Two measures in one response (level first, then downstream stage). The
/// parser takes the first entry only.
#[cfg(test)]
pub(crate) fn fixture_multi_measure_json() -> &'static str {
    r#"{
      "items": [
        {
          "@id": "http://environment.data.gov.uk/flood-monitoring/id/measures/53125-level-stage-i-15_min-m",
          "parameter": "level",
          "period": 900,
          "qualifier": "Stage",
          "latestReading": {
            "dateTime": "2024-01-01T12:15:00Z",
            "value": 1.312
          }
        },
        {
          "@id": "http://environment.data.gov.uk/flood-monitoring/id/measures/53125-level-downstage-i-15_min-m",
          "parameter": "level",
          "period": 900,
          "qualifier": "Downstream Stage",
          "latestReading": {
            "dateTime": "2024-01-01T12:15:00Z",
            "value": 0.877
          }
        }
      ]
    }"#
}

/// Measure without a latestReading — the station exists but has never
/// reported, or the reading was withdrawn. Parser should return Schema.
#[cfg(test)]
pub(crate) fn fixture_missing_latest_reading_json() -> &'static str {
    r#"{
      "items": [
        {
          "@id": "http://environment.data.gov.uk/flood-monitoring/id/measures/53125-level-stage-i-15_min-m",
          "parameter": "level",
          "period": 900,
          "qualifier": "Stage"
        }
      ]
    }"#
}

/// Reading whose value is a string rather than a number. Seen from other
/// endpoints of the same API family; must surface as Schema, not parse as 0.
#[cfg(test)]
pub(crate) fn fixture_non_numeric_value_json() -> &'static str {
    r#"{
      "items": [
        {
          "period": 900,
          "latestReading": {
            "dateTime": "2024-01-01T12:00:00Z",
            "value": "n/a"
          }
        }
      ]
    }"#
}

/// Timestamp with a zone offset instead of the strict "Z" suffix. Parser
/// must reject it as TimeParse rather than quietly reinterpreting the zone.
#[cfg(test)]
pub(crate) fn fixture_offset_datetime_json() -> &'static str {
    r#"{
      "items": [
        {
          "period": 900,
          "latestReading": {
            "dateTime": "2024-01-01T12:00:00+01:00",
            "value": 1.234
          }
        }
      ]
    }"#
}
