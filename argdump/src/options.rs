use std::cell::Cell;
use std::ffi::c_int;

use argtab::{Opt, OptionTable, Slot};

pub const FLAG_HELP: u32 = 0x01;
pub const FLAG_VERBOSE: u32 = 0x02;
pub const FLAG_QUIET: u32 = 0x04;
pub const FLAG_DRY_RUN: u32 = 0x08;
pub const FLAG_FORCE: u32 = 0x10;

/// Destinations for every option argdump understands.
#[derive(Debug)]
pub struct Settings<'a> {
    pub name: Cell<Option<&'a str>>,
    pub device: Cell<Option<&'a str>>,
    pub count: Cell<c_int>,
    pub port: Cell<u16>,
    pub baud: Cell<u32>,
    pub offset: Cell<i64>,
    pub rate: Cell<f64>,
    pub gain: Cell<f32>,
    pub status: Cell<i32>,
    pub flags: Cell<u32>,
}

impl Default for Settings<'_> {
    fn default() -> Self {
        Settings {
            name: Cell::new(None),
            device: Cell::new(None),
            count: Cell::new(1),
            port: Cell::new(8080),
            baud: Cell::new(9600),
            offset: Cell::new(0),
            rate: Cell::new(1.0),
            gain: Cell::new(0.5),
            status: Cell::new(0),
            flags: Cell::new(0),
        }
    }
}

impl Settings<'_> {
    pub fn has(&self, flag: u32) -> bool {
        self.flags.get() & flag != 0
    }
}

pub fn build_table<'d, 'a>(s: &'d Settings<'a>) -> OptionTable<'d, 'a> {
    OptionTable::new()
        .group("General options:")
        .option(
            Opt::new(Slot::Str(&s.name))
                .short('n')
                .long("name")
                .description("Name of this run"),
        )
        .option(
            Opt::new(Slot::Int(&s.count))
                .short('c')
                .long("count")
                .description("Number of repetitions"),
        )
        .option(
            Opt::new(Slot::I64(&s.offset))
                .short('o')
                .long("offset")
                .description("Signed start offset"),
        )
        .group("Device options:")
        .option(
            Opt::new(Slot::Str(&s.device))
                .short('D')
                .long("device")
                .description("Serial device path"),
        )
        .option(
            Opt::new(Slot::U32(&s.baud))
                .short('B')
                .long("baud")
                .description("Line speed"),
        )
        .option(
            Opt::new(Slot::U16(&s.port))
                .short('p')
                .long("port")
                .description("Bridge TCP port"),
        )
        .option(
            Opt::new(Slot::I32(&s.status))
                .short('s')
                .long("status")
                .description("Device status code to check, negative fails"),
        )
        .group("Signal options:")
        .option(
            Opt::new(Slot::Double(&s.rate))
                .short('r')
                .long("rate")
                .description("Sample rate in Hz"),
        )
        .option(
            Opt::new(Slot::Float(&s.gain))
                .short('g')
                .long("gain")
                .description("Input gain"),
        )
        .group("Flags:")
        .option(
            Opt::new(Slot::FlagU32(&s.flags, FLAG_HELP))
                .short('h')
                .long("help")
                .description("Show this help"),
        )
        .option(
            Opt::new(Slot::FlagU32(&s.flags, FLAG_VERBOSE))
                .short('v')
                .long("verbose")
                .description("Report the parse on stderr"),
        )
        .option(
            Opt::new(Slot::FlagU32(&s.flags, FLAG_QUIET))
                .short('q')
                .long("quiet")
                .description("Print nothing on success"),
        )
        .option(
            Opt::new(Slot::FlagU32(&s.flags, FLAG_DRY_RUN))
                .short('d')
                .long("dry-run")
                .description("Skip the device status check"),
        )
        .option(
            Opt::new(Slot::FlagU32(&s.flags, FLAG_FORCE))
                .short('f')
                .long("force")
                .description("Dump values even after conversion errors"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_no_arguments() {
        let settings = Settings::default();
        let table = build_table(&settings);
        table.parse_all(&["argdump"]).unwrap();
        assert_eq!(settings.count.get(), 1);
        assert_eq!(settings.port.get(), 8080);
        assert_eq!(settings.name.get(), None);
        assert_eq!(settings.flags.get(), 0);
    }

    #[test]
    fn mixed_command_line() {
        let args = [
            "argdump",
            "--name=bench",
            "-c3",
            "--device=/dev/ttyUSB0",
            "-B115200",
            "-p0x1F91",
            "-o-40",
            "--rate=44.1e3",
            "-g0.75",
            "-vd",
            "positional",
        ];
        let settings = Settings::default();
        let table = build_table(&settings);
        table.parse_all(&args).unwrap();

        assert_eq!(settings.name.get(), Some("bench"));
        assert_eq!(settings.count.get(), 3);
        assert_eq!(settings.device.get(), Some("/dev/ttyUSB0"));
        assert_eq!(settings.baud.get(), 115200);
        assert_eq!(settings.port.get(), 8081);
        assert_eq!(settings.offset.get(), -40);
        assert_eq!(settings.rate.get(), 44100.0);
        assert_eq!(settings.gain.get(), 0.75);
        assert!(settings.has(FLAG_VERBOSE));
        assert!(settings.has(FLAG_DRY_RUN));
        assert!(!settings.has(FLAG_FORCE));
        assert!(!settings.has(FLAG_HELP));
    }

    #[test]
    fn flags_group_behind_one_dash() {
        let settings = Settings::default();
        let table = build_table(&settings);
        table.parse_all(&["-qfh"]).unwrap();
        assert_eq!(settings.flags.get(), FLAG_QUIET | FLAG_FORCE | FLAG_HELP);
    }

    #[test]
    fn bad_count_is_reported() {
        let settings = Settings::default();
        let table = build_table(&settings);
        let err = table.parse_all(&["--count=many", "-vq"]).unwrap_err();
        assert_eq!(err.failures.len(), 1);
        assert_eq!(err.failures[0].long.as_deref(), Some("count"));
        assert_eq!(settings.count.get(), 1);
        assert!(settings.has(FLAG_VERBOSE | FLAG_QUIET));
    }
}
