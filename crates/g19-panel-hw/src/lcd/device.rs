//! LCD device communication via USB.

use std::sync::Mutex;
use std::time::Duration;

use rusb::{Direction, GlobalContext, Recipient, RequestType};
use tracing::{debug, info};

use crate::{Error, Result, LCD_PID, LCD_VID};

use super::framebuffer::Framebuffer;
use super::protocol::{
    backlight_report, backlight_save_report, brightness_report, build_frame_packet,
    BACKLIGHT_COLOR_VALUE, BACKLIGHT_SAVE_VALUE, BRIGHTNESS_REQUEST, BULK_ENDPOINT, SET_REPORT,
};

/// Interface carrying the bulk display endpoint.
const DISPLAY_INTERFACE: u8 = 0;

/// Interface handling backlight and brightness control transfers.
const BACKLIGHT_INTERFACE: u8 = 1;

/// Transfer timeout, matching the reference implementation's 1000 ms.
const TIMEOUT: Duration = Duration::from_millis(1000);

/// LCD device controller.
pub struct LcdDevice {
    handle: Mutex<rusb::DeviceHandle<GlobalContext>>,
}

impl LcdDevice {
    /// Opens the LCD device by VID:PID and claims both of its interfaces.
    pub fn open() -> Result<Self> {
        let handle =
            rusb::open_device_with_vid_pid(LCD_VID, LCD_PID).ok_or(Error::LcdNotFound)?;

        if let Err(e) = handle.set_auto_detach_kernel_driver(true) {
            debug!("kernel driver auto-detach unavailable: {}", e);
        }
        handle.claim_interface(DISPLAY_INTERFACE)?;
        handle.claim_interface(BACKLIGHT_INTERFACE)?;

        info!("G19 LCD opened (VID:{:04X} PID:{:04X})", LCD_VID, LCD_PID);

        Ok(Self {
            handle: Mutex::new(handle),
        })
    }

    /// Sends a full frame to the display.
    pub fn send_frame(&self, framebuffer: &Framebuffer) -> Result<()> {
        let packet = build_frame_packet(&framebuffer.to_bytes())?;

        let handle = self.handle.lock().unwrap();
        handle.write_bulk(BULK_ENDPOINT, &packet, TIMEOUT)?;

        debug!("frame sent ({} bytes)", packet.len());
        Ok(())
    }

    /// Sets the keyboard backlight to the given color.
    pub fn set_backlight(&self, r: u8, g: u8, b: u8) -> Result<()> {
        self.write_report(BACKLIGHT_COLOR_VALUE, &backlight_report(r, g, b))?;
        debug!("backlight set to #{:02X}{:02X}{:02X}", r, g, b);
        Ok(())
    }

    /// Stores the given color as the keyboard's power-on default.
    pub fn save_default_backlight(&self, r: u8, g: u8, b: u8) -> Result<()> {
        self.write_report(BACKLIGHT_SAVE_VALUE, &backlight_save_report(r, g, b))?;
        info!("default backlight saved: #{:02X}{:02X}{:02X}", r, g, b);
        Ok(())
    }

    /// Sets display brightness, `level` in 0..=100.
    pub fn set_brightness(&self, level: u8) -> Result<()> {
        if level > 100 {
            return Err(Error::InvalidBrightness(level));
        }

        let request_type =
            rusb::request_type(Direction::Out, RequestType::Vendor, Recipient::Interface);
        let handle = self.handle.lock().unwrap();
        handle.write_control(
            request_type,
            BRIGHTNESS_REQUEST,
            0,
            0,
            &brightness_report(level),
            TIMEOUT,
        )?;

        debug!("brightness set to {}", level);
        Ok(())
    }

    /// Writes a HID report to the backlight interface.
    fn write_report(&self, value: u16, report: &[u8]) -> Result<()> {
        let request_type =
            rusb::request_type(Direction::Out, RequestType::Class, Recipient::Interface);
        let handle = self.handle.lock().unwrap();
        handle.write_control(
            request_type,
            SET_REPORT,
            value,
            BACKLIGHT_INTERFACE as u16,
            report,
            TIMEOUT,
        )?;
        Ok(())
    }
}
