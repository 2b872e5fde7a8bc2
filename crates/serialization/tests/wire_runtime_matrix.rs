use graphbeta_serialization::json::{from_json_value, to_json_value, JsonParseNode};
use graphbeta_serialization::{
    AdditionalData, IsoDuration, Parsable, ParseNode, SerializationError, SerializationWriter,
    WireEnum,
};
use serde_json::json;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unset,
    Red,
    Green,
}

impl WireEnum for Color {
    const FAMILY: &'static str = "color";
    const VALUES: &'static [Self] = &[Self::Unset, Self::Red, Self::Green];

    fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Red => "red",
            Self::Green => "green",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "unset" => Self::Unset,
            "red" => Self::Red,
            "green" => Self::Green,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Exercises every reader/writer pair through one record.
#[derive(Debug, Clone, Default, PartialEq)]
struct Probe {
    title: Option<String>,
    enabled: Option<bool>,
    count: Option<i32>,
    total: Option<i64>,
    ratio: Option<f64>,
    payload: Option<Vec<u8>>,
    seen_at: Option<OffsetDateTime>,
    due_on: Option<Date>,
    grace: Option<IsoDuration>,
    ident: Option<Uuid>,
    color: Option<Color>,
    colors: Option<Vec<Color>>,
    tags: Option<Vec<String>>,
    child: Option<Box<Probe>>,
    children: Option<Vec<Probe>>,
    extra: AdditionalData,
}

impl Parsable for Probe {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "title" => {
                if let Some(value) = node.get_string_value()? {
                    self.title = Some(value);
                }
            }
            "enabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.enabled = Some(value);
                }
            }
            "count" => {
                if let Some(value) = node.get_i32_value()? {
                    self.count = Some(value);
                }
            }
            "total" => {
                if let Some(value) = node.get_i64_value()? {
                    self.total = Some(value);
                }
            }
            "ratio" => {
                if let Some(value) = node.get_f64_value()? {
                    self.ratio = Some(value);
                }
            }
            "payload" => {
                if let Some(value) = node.get_byte_array_value()? {
                    self.payload = Some(value);
                }
            }
            "seenAt" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.seen_at = Some(value);
                }
            }
            "dueOn" => {
                if let Some(value) = node.get_date_only_value()? {
                    self.due_on = Some(value);
                }
            }
            "grace" => {
                if let Some(value) = node.get_duration_value()? {
                    self.grace = Some(value);
                }
            }
            "ident" => {
                if let Some(value) = node.get_uuid_value()? {
                    self.ident = Some(value);
                }
            }
            "color" => {
                if let Some(value) = node.get_enum_value()? {
                    self.color = Some(value);
                }
            }
            "colors" => {
                if let Some(value) = node.get_collection_of_enum_values()? {
                    self.colors = Some(value);
                }
            }
            "tags" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.tags = Some(value);
                }
            }
            "child" => {
                if let Some(value) = node.get_object_value(|_| Probe::default())? {
                    self.child = Some(Box::new(value));
                }
            }
            "children" => {
                if let Some(value) = node.get_collection_of_object_values(|_| Probe::default())? {
                    self.children = Some(value);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("title", self.title.as_deref())?;
        writer.write_bool_value("enabled", self.enabled)?;
        writer.write_i32_value("count", self.count)?;
        writer.write_i64_value("total", self.total)?;
        writer.write_f64_value("ratio", self.ratio)?;
        writer.write_byte_array_value("payload", self.payload.as_deref())?;
        writer.write_date_time_value("seenAt", self.seen_at)?;
        writer.write_date_only_value("dueOn", self.due_on)?;
        writer.write_duration_value("grace", self.grace)?;
        writer.write_uuid_value("ident", self.ident)?;
        writer.write_enum_value("color", self.color)?;
        writer.write_collection_of_enum_values("colors", self.colors.as_deref())?;
        writer.write_collection_of_string_values("tags", self.tags.as_deref())?;
        writer.write_object_value("child", self.child.as_deref())?;
        writer.write_collection_of_object_values("children", self.children.as_deref())?;
        writer.write_additional_data(&self.extra)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.extra)
    }
}

fn probe_from(value: &serde_json::Value) -> Probe {
    from_json_value(value, |_| Probe::default()).expect("deserialize probe")
}

#[test]
fn full_scalar_roundtrip() {
    let probe = Probe {
        title: Some("alpha".to_owned()),
        enabled: Some(true),
        count: Some(-7),
        total: Some(9_000_000_000),
        ratio: Some(2.5),
        payload: Some(vec![1, 2, 3, 255]),
        seen_at: Some(datetime!(2024-05-02 10:30:00 UTC)),
        due_on: Some(date!(2024 - 05 - 02)),
        grace: Some("P3DT4H30M".parse().unwrap()),
        ident: Some(Uuid::parse_str("c7c9a4e1-2f4b-4f7a-9d52-0d9a1f0b6f4e").unwrap()),
        color: Some(Color::Green),
        colors: Some(vec![Color::Red, Color::Unset]),
        tags: Some(vec!["x".to_owned(), "y".to_owned()]),
        child: Some(Box::new(Probe {
            title: Some("nested".to_owned()),
            ..Probe::default()
        })),
        children: Some(vec![Probe {
            count: Some(1),
            ..Probe::default()
        }]),
        extra: AdditionalData::new(),
    };

    let value = to_json_value(&probe).unwrap();
    assert_eq!(value["seenAt"], json!("2024-05-02T10:30:00Z"));
    assert_eq!(value["dueOn"], json!("2024-05-02"));
    assert_eq!(value["grace"], json!("P3DT4H30M"));
    assert_eq!(value["payload"], json!("AQID/w=="));
    assert_eq!(value["color"], json!("green"));
    assert_eq!(value["colors"], json!(["red", "unset"]));

    assert_eq!(probe_from(&value), probe);
}

#[test]
fn absent_fields_are_omitted_entirely() {
    let value = to_json_value(&Probe::default()).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn null_fields_read_as_absent() {
    let value = json!({
        "title": null,
        "enabled": null,
        "count": null,
        "tags": null,
        "child": null,
    });
    assert_eq!(probe_from(&value), Probe::default());
}

#[test]
fn unknown_fields_survive_roundtrip_via_bag() {
    let value = json!({
        "title": "kept",
        "someFutureField": {"deep": [1, 2, 3]},
        "anotherOne": "text",
    });
    let probe = probe_from(&value);
    assert_eq!(probe.extra.len(), 2);

    let back = to_json_value(&probe).unwrap();
    assert_eq!(back["someFutureField"], json!({"deep": [1, 2, 3]}));
    assert_eq!(back["anotherOne"], json!("text"));
    assert_eq!(back["title"], json!("kept"));
}

#[test]
fn bag_entries_never_clobber_declared_fields() {
    let mut probe = Probe {
        title: Some("declared".to_owned()),
        ..Probe::default()
    };
    probe
        .extra
        .insert("title".to_owned(), json!("from the bag"));

    let value = to_json_value(&probe).unwrap();
    assert_eq!(value["title"], json!("declared"));
}

#[test]
fn type_mismatch_aborts_the_whole_record() {
    let value = json!({"title": "fine", "count": "not a number"});
    let err = from_json_value(&value, |_| Probe::default()).unwrap_err();
    assert!(matches!(err, SerializationError::UnexpectedKind { .. }));
}

#[test]
fn i64_wide_value_rejected_as_i32() {
    let value = json!({"count": 4_000_000_000_i64});
    let err = from_json_value(&value, |_| Probe::default()).unwrap_err();
    match err {
        SerializationError::OutOfRange { field_kind, value } => {
            assert_eq!(field_kind, "i32");
            assert_eq!(value, 4_000_000_000);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_scalars_are_named_in_errors() {
    let cases = [
        (json!({"seenAt": "yesterday"}), "invalid date/time"),
        (json!({"dueOn": "02/05/2024"}), "invalid date/time"),
        (json!({"grace": "3 days"}), "invalid ISO 8601 duration"),
        (json!({"ident": "not-a-uuid"}), "invalid UUID"),
        (json!({"payload": "!!!"}), "invalid base64"),
    ];
    for (value, needle) in cases {
        let err = from_json_value(&value, |_| Probe::default()).unwrap_err();
        let text = err.to_string();
        assert!(text.contains(needle), "`{text}` missing `{needle}`");
    }
}

#[test]
fn unknown_enum_literal_names_value_and_family() {
    let value = json!({"color": "magenta"});
    let err = from_json_value(&value, |_| Probe::default()).unwrap_err();
    match err {
        SerializationError::UnknownEnumValue { value, family } => {
            assert_eq!(value, "magenta");
            assert_eq!(family, "color");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn enum_parse_stringify_roundtrip() {
    for value in Color::VALUES {
        assert_eq!(Color::parse(value.as_str()).unwrap(), *value);
    }
    assert_eq!(
        Color::serialize_list(&[Color::Green, Color::Red]),
        vec!["green", "red"]
    );
}

#[test]
fn child_node_lookup() {
    let value = json!({"outer": {"inner": "found"}});
    let node = JsonParseNode::new(&value);
    let child = node.get_child_node("outer").unwrap();
    let inner = child.get_child_node("inner").unwrap();
    assert_eq!(inner.get_string_value().unwrap().as_deref(), Some("found"));
    assert!(node.get_child_node("missing").is_none());
}

#[test]
fn factory_receives_discriminator_tag() {
    let value = json!({"@odata.type": "#test.variant", "title": "x"});
    let node = JsonParseNode::new(&value);
    let mut seen = None;
    let _probe: Option<Probe> = node
        .get_object_value(|tag| {
            seen = tag.map(str::to_owned);
            Probe::default()
        })
        .unwrap();
    assert_eq!(seen.as_deref(), Some("#test.variant"));
}
