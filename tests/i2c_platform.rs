use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use vl53l5cx_platform::config::Config;
use vl53l5cx_platform::params::RetryPolicy;
use vl53l5cx_platform::{DeviceAddress, Error, I2cTransport, Platform};

const BUS: u8 = 0x29;

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

#[test]
fn read_byte_addresses_register_then_reads() {
    let expectations = [
        I2cTransaction::write(BUS, vec![0x00, 0x00]),
        I2cTransaction::read(BUS, vec![0xF0]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), Config::default());

    assert_eq!(platform.read_byte(0x0000).unwrap(), 0xF0);
    i2c.done();
}

#[test]
fn large_read_is_split_at_wire_buffer_length() {
    let data = pattern(70);
    let expectations = [
        I2cTransaction::write(BUS, vec![0x2C, 0x00]),
        I2cTransaction::read(BUS, data[0..32].to_vec()),
        I2cTransaction::read(BUS, data[32..64].to_vec()),
        I2cTransaction::read(BUS, data[64..70].to_vec()),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), Config::default());

    let mut buf = [0u8; 70];
    platform.read_multi(0x2C00, &mut buf).unwrap();
    assert_eq!(buf.as_slice(), data.as_slice());
    i2c.done();
}

#[test]
fn large_write_reserves_room_for_register_address() {
    let data = pattern(40);

    let mut first = vec![0x01, 0x00];
    first.extend_from_slice(&data[0..30]);
    let mut second = vec![0x01, 0x1E];
    second.extend_from_slice(&data[30..40]);

    let expectations = [
        I2cTransaction::write(BUS, first),
        I2cTransaction::write(BUS, second),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), Config::default());

    platform.write_multi(0x0100, &data).unwrap();
    i2c.done();
}

#[test]
fn write_byte_sends_address_and_value_together() {
    let expectations = [I2cTransaction::write(BUS, vec![0x7F, 0xFF, 0x02])];
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), Config::default());

    platform.write_byte(0x7FFF, 0x02).unwrap();
    i2c.done();
}

#[test]
fn nacked_address_phase_is_retried() {
    let expectations = [
        I2cTransaction::write(BUS, vec![0x00, 0x04]).with_error(ErrorKind::Other),
        I2cTransaction::write(BUS, vec![0x00, 0x04]).with_error(ErrorKind::Other),
        I2cTransaction::write(BUS, vec![0x00, 0x04]),
        I2cTransaction::read(BUS, vec![0x11, 0x22]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), Config::default());

    let mut buf = [0u8; 2];
    platform.read_multi(0x0004, &mut buf).unwrap();
    assert_eq!(buf, [0x11, 0x22]);
    i2c.done();
}

#[test]
fn bounded_retry_surfaces_addressing_failure() {
    let expectations = [
        I2cTransaction::write(BUS, vec![0x00, 0x04]).with_error(ErrorKind::Other),
        I2cTransaction::write(BUS, vec![0x00, 0x04]).with_error(ErrorKind::Other),
        I2cTransaction::write(BUS, vec![0x00, 0x04]).with_error(ErrorKind::Other),
    ];
    let config = Config::new()
        .address_retry(RetryPolicy::Bounded {
            max_attempts: 3,
            backoff_us: 100,
        })
        .build();
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), config);

    assert_eq!(
        platform.read_byte(0x0004),
        Err(Error::AddressingFailed { attempts: 3 })
    );
    i2c.done();
}

#[test]
fn data_phase_error_is_an_interface_error() {
    let expectations = [
        I2cTransaction::write(BUS, vec![0x00, 0x08]),
        I2cTransaction::read(BUS, vec![0x00]).with_error(ErrorKind::Other),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), Config::default());

    assert_eq!(
        platform.read_byte(0x0008),
        Err(Error::Interface(ErrorKind::Other))
    );
    i2c.done();
}

#[test]
fn failed_final_close_is_returned() {
    let expectations =
        [I2cTransaction::write(BUS, vec![0x00, 0x08, 0x01]).with_error(ErrorKind::Other)];
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), Config::default());

    assert_eq!(
        platform.write_byte(0x0008, 0x01),
        Err(Error::Interface(ErrorKind::Other))
    );
    i2c.done();
}

#[test]
fn one_byte_transport_cannot_frame_a_register_address() {
    let expectations: [I2cTransaction; 0] = [];
    let mut i2c = I2cMock::new(&expectations);
    let transport = I2cTransport::<_, 1>::new(i2c.clone());
    let mut platform = Platform::new(
        transport,
        NoopDelay::new(),
        DeviceAddress::default(),
        Config::default(),
    );

    assert_eq!(platform.read_byte(0x1234), Err(Error::InvalidConfig));
    assert_eq!(platform.write_byte(0x1234, 0x01), Err(Error::InvalidConfig));
    i2c.done();
}

#[test]
fn failed_intermediate_chunk_aborts_the_write() {
    let data = pattern(40);

    let mut first = vec![0x02, 0x00];
    first.extend_from_slice(&data[0..30]);

    let expectations = [I2cTransaction::write(BUS, first).with_error(ErrorKind::Other)];
    let mut i2c = I2cMock::new(&expectations);
    let mut platform = Platform::new_i2c(i2c.clone(), NoopDelay::new(), Config::default());

    assert_eq!(
        platform.write_multi(0x0200, &data),
        Err(Error::Interface(ErrorKind::Other))
    );
    i2c.done();
}
