use super::Reader;
use std::io::{self, BufRead, StdinLock};

pub struct IOReader<R>(R);

impl<R: BufRead> Reader for IOReader<R> {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.0.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead> IOReader<R> {
    pub fn new(reader: R) -> Self {
        Self(reader)
    }
}

impl<'a> IOReader<StdinLock<'a>> {
    pub fn new_stdin(stdin: &'a io::Stdin) -> Self {
        Self::new(stdin.lock())
    }
}
