//! Part-number aliases
//!
//! Every supported part is one of the families in [`super::family`]. The
//! LM75A and LM75B names are used by both NXP and TI for different parts,
//! so those carry a vendor prefix.

use super::family::{
    Generic11Bit, Generic12Bit, Generic9Bit, Nct75, Selectable9To12Bit,
    Selectable9To12BitOneShot, Tmp102,
};
use super::Sensor;

// Maxim

pub type Ds1775Sensor<I2C> = Sensor<I2C, Selectable9To12Bit>;
pub type Ds7505Sensor<I2C> = Sensor<I2C, Selectable9To12Bit>;
pub type Ds75lvSensor<I2C> = Sensor<I2C, Selectable9To12Bit>;
pub type Ds75lxSensor<I2C> = Sensor<I2C, Selectable9To12Bit>;

// Microchip

pub type At30ts750aSensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
pub type Mcp9800Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
pub type Mcp9801Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
pub type Mcp9802Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
pub type Mcp9803Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;

// NXP

/// NXP LM75A (11 bit)
pub type NxpLm75aSensor<I2C> = Sensor<I2C, Generic11Bit>;
/// NXP LM75B (11 bit)
pub type NxpLm75bSensor<I2C> = Sensor<I2C, Generic11Bit>;
pub type Pct2075Sensor<I2C> = Sensor<I2C, Generic11Bit>;
pub type Se95Sensor<I2C> = Sensor<I2C, Generic12Bit>;

// ON Semiconductor

pub type Nct75Sensor<I2C> = Sensor<I2C, Nct75>;
pub type Nct375Sensor<I2C> = Sensor<I2C, Nct75>;

// ST

pub type Stcn75Sensor<I2C> = Sensor<I2C, Generic9Bit>;
pub type Stlm75Sensor<I2C> = Sensor<I2C, Generic9Bit>;
pub type Stts75Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;

// TI

/// Original 9-bit LM75
pub type Lm75Sensor<I2C> = Sensor<I2C, Generic9Bit>;
/// TI LM75A (9 bit)
pub type TiLm75aSensor<I2C> = Sensor<I2C, Generic9Bit>;
/// TI LM75B (9 bit)
pub type TiLm75bSensor<I2C> = Sensor<I2C, Generic9Bit>;
/// TI LM75C (9 bit)
pub type TiLm75cSensor<I2C> = Sensor<I2C, Generic9Bit>;
pub type Tmp100Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
pub type Tmp101Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
pub type Tmp102Sensor<I2C> = Sensor<I2C, Tmp102>;
pub type Tmp112Sensor<I2C> = Sensor<I2C, Tmp102>;
pub type Tmp175Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
pub type Tmp275Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
pub type Tmp75Sensor<I2C> = Sensor<I2C, Selectable9To12BitOneShot>;
