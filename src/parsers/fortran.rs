//! # Fortran 顺序无格式记录读取器
//!
//! CP2K 的 .wfn 重启文件由 Fortran 顺序无格式写出：每条记录前后各有
//! 一个 4 字节长度标记，载荷是同质的整数 (i32) 或浮点 (f64) 数组，
//! 小端字节序。
//!
//! ```text
//! | len: i32 | payload: len 字节 | len: i32 |
//! ```
//!
//! 记录只能按写入顺序依次消费，没有随机访问。
//!
//! ## 依赖关系
//! - 被 `parsers/wfn.rs` 使用
//! - 使用 `byteorder` crate

use std::io::{ErrorKind, Read};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use crate::error::{Result, WfnError};

/// Fortran 顺序记录读取器
pub struct FortranRecordReader<R: Read> {
    inner: R,
}

impl<R: Read> FortranRecordReader<R> {
    pub fn new(inner: R) -> Self {
        FortranRecordReader { inner }
    }

    /// 读取一条整数记录，消费并越过它
    pub fn read_int_record(&mut self) -> Result<Vec<i32>> {
        let payload = self.read_payload()?;
        if payload.len() % 4 != 0 {
            return Err(WfnError::FormatError(format!(
                "integer record payload of {} bytes is not a multiple of 4",
                payload.len()
            )));
        }

        let mut values = vec![0_i32; payload.len() / 4];
        LittleEndian::read_i32_into(&payload, &mut values);
        Ok(values)
    }

    /// 读取一条浮点记录，消费并越过它
    pub fn read_real_record(&mut self) -> Result<Vec<f64>> {
        let payload = self.read_payload()?;
        if payload.len() % 8 != 0 {
            return Err(WfnError::FormatError(format!(
                "real record payload of {} bytes is not a multiple of 8",
                payload.len()
            )));
        }

        let mut values = vec![0.0_f64; payload.len() / 8];
        LittleEndian::read_f64_into(&payload, &mut values);
        Ok(values)
    }

    /// 读取一条记录的载荷并校验前后长度标记一致
    fn read_payload(&mut self) -> Result<Vec<u8>> {
        let len = self.read_marker("at record start")?;
        if len < 0 {
            return Err(WfnError::FormatError(format!(
                "negative record length marker: {}",
                len
            )));
        }

        let mut payload = vec![0_u8; len as usize];
        self.inner.read_exact(&mut payload).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                WfnError::FormatError(format!(
                    "file ends inside a record of {} bytes",
                    len
                ))
            } else {
                WfnError::IoError(e)
            }
        })?;

        let trailer = self.read_marker("at record end")?;
        if trailer != len {
            return Err(WfnError::FormatError(format!(
                "record length markers disagree: {} at start, {} at end",
                len, trailer
            )));
        }

        Ok(payload)
    }

    /// 读取一个 4 字节长度标记
    fn read_marker(&mut self, position: &str) -> Result<i32> {
        self.inner.read_i32::<LittleEndian>().map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                WfnError::FormatError(format!("unexpected end of file {}", position))
            } else {
                WfnError::IoError(e)
            }
        })
    }
}
