//! Integration tests for the scenario runner and public station API.
//!
//! Output goes to an in-memory sink so every line the binary would print
//! can be asserted exactly.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use patterns_observer::{
    Observer, ObserverError, ScenarioConfig, SharedSink, Subject, Temperature, WeatherDisplay,
    WeatherStation, scenario,
};

fn memory_sink() -> SharedSink<Vec<u8>> {
    Rc::new(RefCell::new(Vec::new()))
}

fn output(sink: &SharedSink<Vec<u8>>) -> String {
    String::from_utf8(sink.borrow().clone()).unwrap()
}

#[test]
fn default_scenario_reproduces_classic_demo() {
    let sink = memory_sink();
    let summary = scenario::run(&ScenarioConfig::default(), &sink).unwrap();

    let expected = "\
Temperature changed: 25.0°C
Mobile app shows new temperature: 25.0°C
Digital billboard shows new temperature: 25.0°C
Email shows new temperature: 25.0°C
Temperature changed: 30.0°C
Mobile app shows new temperature: 30.0°C
Digital billboard shows new temperature: 30.0°C
Email shows new temperature: 30.0°C
Error: observer not found.
Observer removed.
Temperature changed: 28.0°C
Mobile app shows new temperature: 28.0°C
Email shows new temperature: 28.0°C
";
    assert_eq!(output(&sink), expected);
    assert_eq!(summary.steps, 5);
    assert_eq!(summary.notifications, 8);
    assert_eq!(summary.failed_removals, 1);
}

#[test]
fn yaml_scenario_runs_end_to_end() {
    let yaml = r#"
displays: ["North", "South"]
steps:
  - action: remove
    display: North
  - action: set_temperature
    celsius: -2.5
  - action: register
    display: North
  - action: set_temperature
    celsius: 0.0
"#;
    let config = ScenarioConfig::parse(yaml).unwrap();
    let sink = memory_sink();
    let summary = scenario::run(&config, &sink).unwrap();

    let expected = "\
Observer removed.
Temperature changed: -2.5°C
South shows new temperature: -2.5°C
North registered.
Temperature changed: 0.0°C
South shows new temperature: 0.0°C
North shows new temperature: 0.0°C
";
    assert_eq!(output(&sink), expected);
    assert_eq!(summary.notifications, 3);
    assert_eq!(summary.failed_removals, 0);
}

#[test]
fn station_drives_real_displays() {
    let sink = memory_sink();
    let mut station = WeatherStation::new();
    let phone = Rc::new(WeatherDisplay::new("Phone", Rc::clone(&sink)));
    let stranger = WeatherDisplay::new("Stranger", Rc::clone(&sink));

    station.register(phone.clone());
    assert_eq!(
        station.remove(stranger.id()).err(),
        Some(ObserverError::NotRegistered { id: stranger.id() })
    );

    station.set_temperature(Temperature::celsius(19.0));
    station.remove(phone.id()).unwrap();
    station.set_temperature(Temperature::celsius(20.0));

    assert_eq!(output(&sink), "Phone shows new temperature: 19.0°C\n");
    assert_eq!(station.observer_count(), 0);
}

#[test]
fn example_config_file_loads_and_runs() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("weather-station.example.yaml");
    let config = ScenarioConfig::from_file(&path).unwrap();
    let sink = memory_sink();
    let summary = scenario::run(&config, &sink).unwrap();

    assert_eq!(summary.steps, 7);
    assert_eq!(summary.notifications, 11);
    assert_eq!(summary.failed_removals, 1);
    assert!(output(&sink).ends_with(
        "Digital billboard registered.\n\
         Temperature changed: 26.5°C\n\
         Mobile app shows new temperature: 26.5°C\n\
         Email shows new temperature: 26.5°C\n\
         Digital billboard shows new temperature: 26.5°C\n"
    ));
}
