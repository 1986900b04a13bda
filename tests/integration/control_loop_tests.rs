//! Integration tests: GPIO levels → ControlState → LED outputs.

use embedded_hal::digital::PinState;
use touchled::app::channel::ChannelId;
use touchled::app::events::{TouchEvent, TouchKind};
use touchled::app::led_registry::LedId;
use touchled::app::service::ControlState;
use touchled::config::{HoldPolicy, TouchConfig};
use touchled::drivers::hw_init::{HwInitError, PinDirection};
use touchled::error::Error;
use touchled::pins::CHANNEL_COUNT;

use super::mock_hw::MockGpio;

const PERIOD: u32 = 50;

fn make_state(config: &TouchConfig) -> ControlState<MockGpio> {
    let mut state = ControlState::new(MockGpio::new(), config);
    state.init().expect("init");
    state
}

fn kinds(events: &[TouchEvent]) -> Vec<(ChannelId, TouchKind)> {
    events.iter().map(|e| (e.channel, e.kind)).collect()
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn init_configures_inputs_then_outputs() {
    let state = make_state(&TouchConfig::default());
    let configured = state.gpio().configured();
    assert_eq!(configured.len(), 2 * CHANNEL_COUNT);
    for (i, ch) in ChannelId::ALL.into_iter().enumerate() {
        assert_eq!(configured[i], (ch.touch_pin(), PinDirection::Input));
        assert_eq!(configured[CHANNEL_COUNT + i], (ch.led().pin(), PinDirection::Output));
    }
    for id in LedId::ALL {
        assert_eq!(state.gpio().led_level(id), Some(PinState::Low));
    }
}

#[test]
fn init_failure_surfaces_as_init_error() {
    let mut gpio = MockGpio::new();
    gpio.fail_pin = Some(LedId::Led3.pin());
    let mut state = ControlState::new(gpio, &TouchConfig::default());
    assert_eq!(
        state.init(),
        Err(Error::Init(HwInitError::GpioConfigFailed {
            pin: LedId::Led3.pin(),
            rc: -1
        }))
    );
}

// ── Reference scenario ────────────────────────────────────────

#[test]
fn channel_two_low_low_low_high() {
    let config = TouchConfig {
        poll_interval_ms: PERIOD,
        long_press_ms: 100,
        ..TouchConfig::default()
    };
    let mut state = make_state(&config);
    let ch = ChannelId::try_from(2).unwrap();
    let led = LedId::try_from(2).unwrap();

    let script = [PinState::Low, PinState::Low, PinState::Low, PinState::High];
    let mut per_tick = Vec::new();
    for (n, level) in script.into_iter().enumerate() {
        state.gpio_mut().set_input(ch, level);
        per_tick.push(kinds(&state.poll(PERIOD * (n as u32 + 1))));
    }

    assert_eq!(per_tick[0], vec![(ch, TouchKind::Press)]);
    assert!(per_tick[1].is_empty());
    assert!(per_tick[2].is_empty());
    assert_eq!(per_tick[3], vec![(ch, TouchKind::Release)]);

    assert_eq!(state.led(2), Ok(true), "LED stays on after release");
    assert_eq!(state.gpio().led_level(led), Some(PinState::High));
    assert!(!state.channel(ch).is_pressed());
    assert!(!state.channel(ch).toggled_this_press());
}

// ── Press / hold / release ordering ───────────────────────────

#[test]
fn press_hold_release_in_order_with_once_per_press() {
    let config = TouchConfig {
        hold_policy: HoldPolicy::OncePerPress,
        ..TouchConfig::default()
    };
    let mut state = make_state(&config);
    let ch = ChannelId::Ch1;

    let mut all = Vec::new();
    state.gpio_mut().press(ch);
    for t in (0..=1_000).step_by(PERIOD as usize) {
        all.extend(kinds(&state.poll(t)));
    }
    state.gpio_mut().release(ch);
    all.extend(kinds(&state.poll(1_050)));

    assert_eq!(
        all,
        vec![
            (ch, TouchKind::Press),
            (ch, TouchKind::Hold),
            (ch, TouchKind::Release)
        ]
    );
}

#[test]
fn suppressed_policy_never_reports_hold() {
    let mut state = make_state(&TouchConfig::default());
    let ch = ChannelId::Ch4;

    let mut all = Vec::new();
    state.gpio_mut().press(ch);
    for t in (0..=5_000).step_by(PERIOD as usize) {
        all.extend(kinds(&state.poll(t)));
    }
    state.gpio_mut().release(ch);
    all.extend(kinds(&state.poll(5_050)));

    assert_eq!(all, vec![(ch, TouchKind::Press), (ch, TouchKind::Release)]);
}

#[test]
fn short_press_under_threshold_has_no_hold() {
    let config = TouchConfig {
        hold_policy: HoldPolicy::OncePerPress,
        ..TouchConfig::default()
    };
    let mut state = make_state(&config);
    let ch = ChannelId::Ch2;

    state.gpio_mut().press(ch);
    let mut all = kinds(&state.poll(0));
    all.extend(kinds(&state.poll(PERIOD)));
    state.gpio_mut().release(ch);
    all.extend(kinds(&state.poll(2 * PERIOD)));

    assert_eq!(all, vec![(ch, TouchKind::Press), (ch, TouchKind::Release)]);
}

// ── Toggle semantics ──────────────────────────────────────────

#[test]
fn two_full_press_cycles_restore_led() {
    let mut state = make_state(&TouchConfig::default());
    let ch = ChannelId::Ch3;
    let mut t = 0;

    for expected_after_press in [true, false] {
        state.gpio_mut().press(ch);
        state.poll(t);
        t += PERIOD;
        assert_eq!(state.led(ch.led().index()), Ok(expected_after_press));
        state.gpio_mut().release(ch);
        state.poll(t);
        t += PERIOD;
    }

    assert_eq!(state.led_bits(), 0);
    assert_eq!(state.gpio().led_level(ch.led()), Some(PinState::Low));
}

#[test]
fn sustained_press_toggles_exactly_once() {
    let mut state = make_state(&TouchConfig::default());
    let ch = ChannelId::Ch1;
    let pin = ch.led().pin();
    let writes_after_init = state.gpio().writes_to(pin);

    state.gpio_mut().press(ch);
    for n in 0..200 {
        state.poll(n * PERIOD);
    }

    assert_eq!(state.gpio().writes_to(pin), writes_after_init + 1);
    assert_eq!(state.press_count(), 1);
    assert_eq!(state.poll_count(), 200);
}

#[test]
fn channels_are_independent() {
    let mut state = make_state(&TouchConfig::default());

    state.gpio_mut().press(ChannelId::Ch1);
    let events = state.poll(0);
    assert_eq!(kinds(&events), vec![(ChannelId::Ch1, TouchKind::Press)]);

    let other = state.channel(ChannelId::Ch2);
    assert!(!other.is_pressed());
    assert!(!other.toggled_this_press());
    assert_eq!(state.led(1), Ok(false));
    assert_eq!(state.gpio().led_level(LedId::Led2), Some(PinState::Low));
    assert_eq!(state.led_bits(), 0b0001);
}

#[test]
fn every_input_sampled_once_per_poll() {
    use super::mock_hw::GpioCall;

    let mut state = make_state(&TouchConfig::default());
    state.gpio_mut().calls.clear();
    state.poll(0);

    let reads: Vec<i32> = state
        .gpio()
        .calls
        .iter()
        .filter_map(|c| match c {
            GpioCall::Read { pin } => Some(*pin),
            _ => None,
        })
        .collect();
    let expected: Vec<i32> = ChannelId::ALL.iter().map(|c| c.touch_pin()).collect();
    assert_eq!(reads, expected);
}

#[test]
fn external_writer_and_press_share_the_registry() {
    let mut state = make_state(&TouchConfig::default());
    state.set_led(0, true).unwrap();

    state.gpio_mut().press(ChannelId::Ch1);
    state.poll(0);

    assert_eq!(state.led(0), Ok(false), "press toggles from the externally set state");
    assert_eq!(state.set_led(CHANNEL_COUNT, true), Err(Error::InvalidChannel(CHANNEL_COUNT)));
}
