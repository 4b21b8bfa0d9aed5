use criterion::{BatchSize, Criterion};
use libcli::console::{ConsoleIo, Error};
use libcli::shell::{CommandDefinition, Interpreter, MAX_LINE_LEN, OutputBuffer};
use std::fmt::Write;
use std::hint::black_box;
use std::time::Duration;

/// Transport that discards everything written to it.
struct Sink {
    written: usize,
}

impl ConsoleIo for Sink {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Error> {
        Ok(0)
    }

    fn read_timeout(&mut self, _buf: &mut [u8], _timeout: Duration) -> Result<usize, Error> {
        Ok(0)
    }

    fn readline(&mut self, _line: &mut [u8]) -> Result<Option<usize>, Error> {
        Ok(None)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.written += bytes.len();
        Ok(())
    }
}

fn heapstat(_io: &mut dyn ConsoleIo, out: &mut OutputBuffer, argc: usize, argv: &[&str]) {
    let _ = write!(out, "heap: {} args", argc);
    for arg in argv {
        let _ = write!(out, " {}", arg);
    }
    let _ = out.write_str("\r\n");
}

static COMMANDS: [CommandDefinition; 4] = [
    CommandDefinition::new("heapstat", "heapstat:\r\n    Heap usage\r\n", heapstat),
    CommandDefinition::new("ps", "ps:\r\n    List tasks\r\n", heapstat),
    CommandDefinition::new("uptime", "uptime:\r\n    Time since boot\r\n", heapstat),
    CommandDefinition::new("conf", "conf <get|set> <key> [value]\r\n", heapstat),
];

fn setup_shell() -> Interpreter {
    let mut shell = Interpreter::new();
    shell.register_all(&COMMANDS).expect("Failed to register");
    shell
}

fn line_of(text: &str) -> [u8; MAX_LINE_LEN] {
    let mut line = [0u8; MAX_LINE_LEN];
    line[..text.len()].copy_from_slice(text.as_bytes());
    line
}

pub fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_command");
    let mut shell = setup_shell();
    let mut io = Sink { written: 0 };

    for (name, text) in [
        ("matched", "conf set mqtt_endpoint \"broker.local\""),
        ("unmatched", "reboot now"),
        ("empty", "   "),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched_ref(
                || line_of(text),
                |line| black_box(shell.process_command(&mut io, &mut line[..text.len()])),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
    black_box(io.written);
}

pub fn bench_help(c: &mut Criterion) {
    let mut shell = setup_shell();
    let mut io = Sink { written: 0 };

    c.bench_function("help", |b| {
        b.iter_batched_ref(
            || line_of("help"),
            |line| black_box(shell.process_command(&mut io, &mut line[..4])),
            BatchSize::SmallInput,
        );
    });
}
