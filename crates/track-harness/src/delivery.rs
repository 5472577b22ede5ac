//! Delivery of fired events as JSON lines.

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use track_core::{FieldMap, OptionMap, TriggerFn};

/// One delivered event, as written to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub event: String,
    pub fields: FieldMap,
    pub options: OptionMap,
}

/// A trigger that writes each delivered event to `writer` as one line of JSON.
///
/// Write failures are returned to whoever fired the event.
pub fn json_line_trigger<W>(writer: Arc<Mutex<W>>) -> TriggerFn
where
    W: Write + Send + 'static,
{
    TriggerFn::new(move |event, fields, options| {
        let delivery = Delivery {
            event: event.to_string(),
            fields: fields.clone(),
            options: options.clone(),
        };
        let line = serde_json::to_string(&delivery)?;
        let mut writer = writer
            .lock()
            .map_err(|_| "delivery writer lock poisoned")?;
        writeln!(writer, "{line}")?;
        tracing::debug!(event, "Delivered event");
        Ok(())
    })
}

/// A trigger that writes deliveries to stdout.
pub fn stdout_trigger() -> TriggerFn {
    json_line_trigger(Arc::new(Mutex::new(std::io::stdout())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_per_delivery() {
        let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
        let trigger = json_line_trigger(Arc::clone(&buffer));
        let fields: FieldMap = [("who".to_string(), "me".to_string())].into();

        trigger.call("generic.click", &fields, &OptionMap::new()).unwrap();
        trigger.call("generic.click", &FieldMap::new(), &OptionMap::new()).unwrap();

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"event":"generic.click","fields":{"who":"me"},"options":{}}"#
        );
        let parsed: Delivery = serde_json::from_str(lines[1]).unwrap();
        assert!(parsed.fields.is_empty());
    }
}
