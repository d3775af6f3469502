use racing_snake::{
    domain::{TD1K, TD2K, TD400},
    prelude::*,
    simulation::Values,
    snake::{reset_sync::RST_STAGES, sequencer::SNAKE_CYCLE},
};

fn simulate<S: Stimulus>(config: SnakeConfig, stimulus: S) -> Values<Simulation<S>> {
    Simulation::new(RacingSnake::new(config).unwrap(), stimulus).values()
}

/// Samples from the first cycle the design runs out of reset.
fn running(config: SnakeConfig) -> impl Iterator<Item = Sample> {
    let polarity = config.rst_polarity;
    simulate(config, ResetPulse::released(polarity)).skip(RST_STAGES)
}

mod tick_generator {
    use super::*;

    fn pulse_cycles(config: SnakeConfig, cycles: usize) -> Vec<u64> {
        running(config)
            .take(cycles)
            .filter(|sample| sample.state.tick)
            .map(|sample| sample.cycle)
            .collect()
    }

    #[test]
    fn one_pulse_per_period() {
        let config = SnakeConfig::for_domain::<TD2K>();
        let period = config.tick_max() + 1;
        assert_eq!(period, 5);

        let pulses = pulse_cycles(config, 1_000);
        assert_eq!(pulses.len(), 200);
        assert!(pulses.windows(2).all(|w| w[1] - w[0] == period));
    }

    #[test]
    fn rounded_period() {
        let config = SnakeConfig::for_domain::<TD1K>();
        let pulses = pulse_cycles(config, 30);
        assert_eq!(pulses.len(), 10);
        assert!(pulses.windows(2).all(|w| w[1] - w[0] == 3));
    }

    #[test]
    fn pulse_every_cycle_at_tick_rate() {
        let config = SnakeConfig::for_domain::<TD400>();
        assert!(running(config).take(50).all(|sample| sample.state.tick));
    }
}

mod sequencers {
    use super::*;

    #[test]
    fn full_cycle() {
        let config = SnakeConfig::for_domain::<TD400>();
        // The first running cycle loads the tick register.
        let samples = running(config)
            .skip(1)
            .take(SNAKE_CYCLE)
            .collect::<Vec<_>>();

        let mut advances = [0; 2];
        let mut prev = [Frame::default(); 2];
        for sample in &samples {
            for (idx, frame) in sample.state.frames.into_iter().enumerate() {
                if frame != prev[idx] {
                    assert_eq!(prev[idx].succ(), frame);
                    advances[idx] += 1;
                }
            }
            prev = sample.state.frames;
        }

        assert_eq!(advances, [5, 6]);
        let last = samples.last().unwrap();
        assert!(last.state.snake_cnt.is_min());
        assert_eq!(last.state.frames, [Frame::new(5), Frame::new(6)]);
    }

    #[test]
    fn frames_visit_every_value_in_order() {
        let config = SnakeConfig::for_domain::<TD400>();
        let mut seen = vec![Frame::default()];
        for sample in running(config).take(34 * 40 + 1) {
            let frame = sample.state.frames[1];
            if *seen.last().unwrap() != frame {
                seen.push(frame);
            }
        }

        let expected = Frame::all().chain([Frame::new(0)]).collect::<Vec<_>>();
        assert_eq!(seen, expected);
    }
}

mod digit_mux {
    use super::*;

    #[test]
    fn even_split() {
        let width = 4;
        let config = SnakeConfig::for_domain::<TD1K>().with_mux_width(width);
        let period = 1_usize << width;
        let digits = running(config)
            .take(period * 8)
            .map(|sample| sample.output.digit)
            .collect::<Vec<_>>();

        for chunk in digits.chunks(period) {
            let on_digit1 = chunk.iter().filter(|digit| **digit == Digit::Digit1).count();
            assert_eq!(on_digit1, period / 2);
        }
        // First running cycle increments the counter to 1.
        assert_eq!(digits[period / 2 - 2], Digit::Digit0);
        assert_eq!(digits[period / 2 - 1], Digit::Digit1);
        assert_eq!(digits[period - 2], Digit::Digit1);
        assert_eq!(digits[period - 1], Digit::Digit0);
    }

    #[test]
    fn output_shows_selected_snake() {
        let config = SnakeConfig::for_domain::<TD400>().with_mux_width(2);
        for sample in running(config).take(2_000) {
            let frame = sample.state.frames[sample.output.digit.idx()];
            assert_eq!(sample.output.segments, frame.segments());
        }
    }
}

mod reset {
    use super::*;

    #[test]
    fn power_up_holds_reset_for_sync_stages() {
        let config = SnakeConfig::for_domain::<TD400>();
        let samples = simulate(config, ResetPulse::new(20, Polarity::ActiveLow))
            .take(40)
            .collect::<Vec<_>>();

        // 20 asserted samples, then 8 released samples to fill the history.
        for sample in &samples[..28] {
            assert!(sample.state.is_initial(), "cycle {}", sample.cycle);
            assert_eq!(sample.output.digit, Digit::Digit0);
            assert_eq!(sample.output.segments, Frame::new(0).segments());
        }
        assert!(!samples[28].state.is_initial());
    }

    #[test]
    fn reset_mid_run() {
        let config = SnakeConfig::for_domain::<TD400>().with_mux_width(3);
        let asserted = 500..510;
        let samples = simulate(config, |cycle: u64| !asserted.contains(&cycle))
            .take(600)
            .collect::<Vec<_>>();

        // The edge sampling the first asserted level still advances.
        assert!(!samples[499].state.rst);
        assert!(!samples[500].state.is_initial());
        assert!(samples[500].state.rst);
        for sample in &samples[501..518] {
            assert!(sample.state.is_initial(), "cycle {}", sample.cycle);
            assert_eq!(
                sample.output,
                DisplayOutput {
                    segments: Frame::new(0).segments(),
                    digit: Digit::Digit0,
                }
            );
        }
        assert!(!samples[518].state.is_initial());
        assert_eq!(samples[518].state.mux_cnt.val(), 1);
    }

    #[test]
    fn active_high_reset_line() {
        let config = SnakeConfig {
            rst_polarity: Polarity::ActiveHigh,
            ..SnakeConfig::for_domain::<TD400>()
        };
        let samples = simulate(config, ResetPulse::new(4, Polarity::ActiveHigh))
            .take(13)
            .collect::<Vec<_>>();
        assert!(samples[..12].iter().all(|sample| sample.state.is_initial()));
        assert!(samples[..4].iter().all(|sample| sample.rst_level));
        assert!(!samples[12].state.is_initial());
    }
}

mod waveform {
    use racing_snake::simulation::trace_vcd;

    use super::*;

    #[test]
    fn vcd_dump() {
        let mut out = Vec::new();
        let config = SnakeConfig::for_domain::<TD1K>().with_mux_width(4);
        trace_vcd(&mut out, config, ResetPulse::new(2, Polarity::ActiveLow), 40).unwrap();

        let vcd = String::from_utf8(out).unwrap();
        for var in [
            " clk $end",
            " snake$rst_level $end",
            " snake$rst_int $end",
            " snake$tick_cnt $end",
            " snake$snake_cnt $end",
            " snake$frame$0 $end",
            " snake$frame$1 $end",
            " snake$mux_cnt $end",
            " snake$dig_sel $end",
            " snake$seg $end",
        ] {
            assert!(vcd.contains(var), "missing {var:?}");
        }
        // 1 kHz clock, timestamps in picoseconds.
        assert!(vcd.contains("#0\n"));
        assert!(vcd.contains("#500000000\n"));
        assert!(vcd.contains("#39500000000\n"));
        assert!(!vcd.contains("#40000000000\n"));
    }

    #[test]
    fn invalid_config() {
        let config = SnakeConfig::default().with_mux_width(0);
        let err = trace_vcd(Vec::new(), config, ResetPulse::released(Polarity::ActiveLow), 1)
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidMuxWidth(0))));
    }
}
