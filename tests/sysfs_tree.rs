//! Exercises `SysfsGpio` against a directory laid out like `/sys/class/gpio`.
//!
//! Plain files don't react to writes the way the kernel does, so pin directories are created by hand
//! and reservations are checked by looking at what landed in `export`/`unexport`.

use embedded_hal::digital::v2::{
    InputPin as _, OutputPin as _, StatefulOutputPin as _, ToggleableOutputPin as _,
};
use galileo_sysfs_gpio::{
    BlinkSequence, ControlFileError, Direction, GpioError, PinId, SysfsGpio, Value,
};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::{tempdir, TempDir};

fn control_root() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("export"), "").unwrap();
    fs::write(dir.path().join("unexport"), "").unwrap();
    dir
}

fn fake_exported(root: &Path, pin: u32) {
    let pin_dir = root.join(format!("gpio{}", pin));
    fs::create_dir(&pin_dir).unwrap();
    fs::write(pin_dir.join("direction"), "in\n").unwrap();
    fs::write(pin_dir.join("value"), "0\n").unwrap();
}

fn content(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn export_and_unexport_write_bare_pin_number() {
    let root = control_root();
    let gpio = SysfsGpio::with_root(root.path());
    assert_eq!(gpio.root(), root.path());

    gpio.export(PinId(46)).unwrap();
    assert_eq!(content(root.path().join("export")), "46");

    gpio.unexport(PinId(7)).unwrap();
    assert_eq!(content(root.path().join("unexport")), "7");
}

#[test]
fn export_fails_without_control_file() {
    let root = tempdir().unwrap();
    let gpio = SysfsGpio::with_root(root.path());

    let err = gpio.export(PinId(30)).unwrap_err();

    match err {
        GpioError::Export(PinId(30), ControlFileError::OpenFailed { path, .. }) => {
            assert_eq!(path, root.path().join("export"))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejected_export_carries_write_error() {
    let root = tempdir().unwrap();
    std::os::unix::fs::symlink("/dev/full", root.path().join("export")).unwrap();
    let gpio = SysfsGpio::with_root(root.path());

    assert!(matches!(
        gpio.export(PinId(30)),
        Err(GpioError::Export(PinId(30), ControlFileError::WriteFailed { .. }))
    ));
}

#[test]
fn configuring_unreserved_pin_fails() {
    let root = control_root();
    let gpio = SysfsGpio::with_root(root.path());

    assert!(!gpio.is_exported(PinId(7)));
    assert!(matches!(
        gpio.set_direction(PinId(7), Direction::Output),
        Err(GpioError::Direction(PinId(7), Direction::Output, ControlFileError::OpenFailed { .. }))
    ));
    assert!(matches!(
        gpio.set_value(PinId(7), Value::High),
        Err(GpioError::Value(PinId(7), Value::High, ControlFileError::OpenFailed { .. }))
    ));
    assert!(!root.path().join("gpio7").exists());
}

#[test]
fn value_reads_back_what_was_written() {
    let root = control_root();
    fake_exported(root.path(), 7);
    let gpio = SysfsGpio::with_root(root.path());

    gpio.set_direction(PinId(7), Direction::Output).unwrap();
    assert_eq!(content(root.path().join("gpio7/direction")), "out");
    assert_eq!(gpio.get_direction(PinId(7)).unwrap(), Direction::Output);

    gpio.set_value(PinId(7), Value::High).unwrap();
    assert_eq!(content(root.path().join("gpio7/value")), "1");
    assert_eq!(gpio.get_value(PinId(7)).unwrap(), Value::High);

    gpio.set_value(PinId(7), Value::Low).unwrap();
    assert_eq!(gpio.get_value(PinId(7)).unwrap(), Value::Low);
}

#[test]
fn garbage_in_value_file_is_reported() {
    let root = control_root();
    fake_exported(root.path(), 7);
    fs::write(root.path().join("gpio7/value"), "high\n").unwrap();
    let gpio = SysfsGpio::with_root(root.path());

    match gpio.get_value(PinId(7)).unwrap_err() {
        GpioError::ReadValue(_, ControlFileError::UnexpectedContent { content, .. }) => {
            assert_eq!(content, "high")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn pin_handles_drive_control_files() {
    let root = control_root();
    fake_exported(root.path(), 7);
    let gpio = SysfsGpio::with_root(root.path());

    let mut led = gpio.output_pin(PinId(7)).unwrap();
    assert_eq!(led.id().number(), 7);
    assert_eq!(content(root.path().join("gpio7/direction")), "out");

    led.set_high().unwrap();
    assert_eq!(content(root.path().join("gpio7/value")), "1");
    assert!(led.is_set_high().unwrap());
    led.toggle().unwrap();
    assert_eq!(content(root.path().join("gpio7/value")), "0");
    assert!(led.is_set_low().unwrap());

    let input = led.into_input().unwrap();
    assert_eq!(input.id(), PinId(7));
    assert_eq!(content(root.path().join("gpio7/direction")), "in");
    assert!(input.is_low().unwrap());
}

#[test]
fn blink_sequence_leaves_led_low_and_releases_last_pin() {
    let root = control_root();
    for pin in &[30, 46, 7] {
        fake_exported(root.path(), *pin);
    }
    let gpio = SysfsGpio::with_root(root.path());
    let sequence = BlinkSequence {
        blinks: 3,
        interval: Duration::from_millis(0),
        ..Default::default()
    };

    sequence.run(&gpio).unwrap();

    for pin in &[30, 46, 7] {
        let pin_dir = root.path().join(format!("gpio{}", pin));
        assert_eq!(content(pin_dir.join("direction")), "out");
        assert_eq!(content(pin_dir.join("value")), "0");
    }
    assert_eq!(content(root.path().join("export")), "7");
    assert_eq!(content(root.path().join("unexport")), "7");
}

#[test]
fn blink_sequence_fails_without_gpio_support() {
    let root = tempdir().unwrap();
    let gpio = SysfsGpio::with_root(root.path());

    let err = BlinkSequence::default().run(&gpio).unwrap_err();

    assert!(matches!(err, GpioError::Export(PinId(30), _)));
}

#[test]
fn failed_cleanup_keeps_original_error() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("export"), "").unwrap();
    fake_exported(root.path(), 30);
    fake_exported(root.path(), 46);
    let gpio = SysfsGpio::with_root(root.path());

    // No gpio7 node, so the LED can't be configured; no unexport file, so every release fails too.
    let err = BlinkSequence::default().run(&gpio).unwrap_err();

    assert!(matches!(
        err,
        GpioError::Direction(PinId(7), Direction::Output, ControlFileError::OpenFailed { .. })
    ));
    assert_eq!(content(root.path().join("gpio46/value")), "0");
}

/// Needs a board with sysfs GPIO and write access to `/sys/class/gpio`.
/// Run with `GPIO_TEST_PIN=<n> cargo test -- --ignored`.
#[test]
#[ignore]
fn reservation_round_trip_on_hardware() {
    let pin = PinId(
        std::env::var("GPIO_TEST_PIN")
            .expect("GPIO_TEST_PIN not set")
            .parse()
            .expect("GPIO_TEST_PIN is not a number"),
    );
    let gpio = SysfsGpio::new();

    gpio.export(pin).unwrap();
    assert!(gpio.is_exported(pin));

    // The kernel refuses a second export of the same pin with EBUSY.
    assert!(matches!(
        gpio.export(pin),
        Err(GpioError::Export(_, ControlFileError::WriteFailed { .. }))
    ));

    gpio.set_direction(pin, Direction::Output).unwrap();
    gpio.set_value(pin, Value::High).unwrap();
    assert_eq!(gpio.get_value(pin).unwrap(), Value::High);
    gpio.set_value(pin, Value::Low).unwrap();
    assert_eq!(gpio.get_value(pin).unwrap(), Value::Low);

    gpio.unexport(pin).unwrap();
    assert!(!gpio.is_exported(pin));
}
