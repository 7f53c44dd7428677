//! tty-backed serial link
//!
//! Opens a character device, switches it to raw mode and sets the line
//! speed with termios. Writes go straight to the file descriptor; `flush`
//! waits until the kernel has pushed every byte onto the wire.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use serlcd_core::geometry::ConfigError;
use serlcd_hal::{DataBits, Parity, SerialConfig, SerialTx, StopBits};
use termios::os::target::{B115200, B1200, B19200, B230400, B2400, B38400, B4800, B57600, B9600};
use termios::{
    cfmakeraw, cfsetspeed, speed_t, tcdrain, tcsetattr, Termios, CLOCAL, CREAD, CS7, CS8, CSIZE,
    CSTOPB, PARENB, PARODD, TCSANOW,
};

use crate::error::Error;

/// Baud rates the link can be opened at
pub const SUPPORTED_BAUD_RATES: [u32; 9] = [
    1200, 2400, 4800, 9600, 19_200, 38_400, 57_600, 115_200, 230_400,
];

/// termios speed constant for a baud rate
pub fn speed_for(baudrate: u32) -> Option<speed_t> {
    let speed = match baudrate {
        1200 => B1200,
        2400 => B2400,
        4800 => B4800,
        9600 => B9600,
        19_200 => B19200,
        38_400 => B38400,
        57_600 => B57600,
        115_200 => B115200,
        230_400 => B230400,
        _ => return None,
    };
    Some(speed)
}

/// An open serial port
#[derive(Debug)]
pub struct SerialPort {
    file: File,
    path: PathBuf,
}

impl SerialPort {
    /// Open and configure the device at `path`
    ///
    /// An unsupported baud rate is rejected before the device is opened.
    pub fn open(path: impl AsRef<Path>, config: &SerialConfig) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let speed =
            speed_for(config.baudrate).ok_or(ConfigError::UnsupportedBaudRate(config.baudrate))?;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NOCTTY)
            .open(&path)
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;

        if let Err(source) = configure(file.as_raw_fd(), speed, config) {
            return Err(Error::Configure { path, source });
        }

        debug!("opened {} at {} baud", path.display(), config.baudrate);
        Ok(Self { file, path })
    }
}

/// Raw mode, requested speed and framing, ignore modem control lines
fn configure(fd: RawFd, speed: speed_t, config: &SerialConfig) -> io::Result<()> {
    let mut tty = Termios::from_fd(fd)?;
    cfmakeraw(&mut tty);
    cfsetspeed(&mut tty, speed)?;

    tty.c_cflag |= CLOCAL | CREAD;

    tty.c_cflag &= !CSIZE;
    tty.c_cflag |= match config.data_bits {
        DataBits::Seven => CS7,
        DataBits::Eight => CS8,
    };

    tty.c_cflag &= !(PARENB | PARODD);
    match config.parity {
        Parity::None => {}
        Parity::Even => tty.c_cflag |= PARENB,
        Parity::Odd => tty.c_cflag |= PARENB | PARODD,
    }

    match config.stop_bits {
        StopBits::One => tty.c_cflag &= !CSTOPB,
        StopBits::Two => tty.c_cflag |= CSTOPB,
    }

    tcsetattr(fd, TCSANOW, &tty)
}

impl SerialTx for SerialPort {
    type Error = io::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), io::Error> {
        trace!("{} <- {:02X?}", self.path.display(), data);
        self.file.write_all(data)
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.file.flush()?;
        tcdrain(self.file.as_raw_fd())
    }
}
