use std::{
    fmt::Write as _,
    io::{self, Write},
};

use derive_where::derive_where;
use rustc_hash::FxHashMap;
pub use vcd::{IdCode, Value as TraceValue};
use vcd::{TimescaleUnit, VarType, Writer as VcdWriter};

use crate::{index::Idx, unsigned::Unsigned};

pub trait Traceable {
    fn add_vars(&self, vars: &mut TraceVars);

    fn trace<W: Write>(&self, id: &mut IdCode, tracer: &mut Tracer<W>) -> io::Result<()>;
}

impl<'a, T: Traceable> Traceable for &'a T {
    #[inline]
    fn add_vars(&self, vars: &mut TraceVars) {
        (*self).add_vars(vars);
    }

    #[inline]
    fn trace<W: Write>(&self, id: &mut IdCode, tracer: &mut Tracer<W>) -> io::Result<()> {
        (*self).trace(id, tracer)
    }
}

pub(crate) fn bool_to_vcd(b: bool) -> vcd::Value {
    if b {
        vcd::Value::V1
    } else {
        vcd::Value::V0
    }
}

impl Traceable for bool {
    fn add_vars(&self, vars: &mut TraceVars) {
        vars.add_ty(TraceTy::Wire);
    }

    fn trace<W: Write>(&self, id: &mut IdCode, tracer: &mut Tracer<W>) -> io::Result<()> {
        tracer.change_wire(id, bool_to_vcd(*self))
    }
}

/// Traced as a bus, element 0 in the least significant bit.
impl<const N: usize> Traceable for [bool; N] {
    fn add_vars(&self, vars: &mut TraceVars) {
        vars.add_ty(TraceTy::Bus(N as u32));
    }

    fn trace<W: Write>(&self, id: &mut IdCode, tracer: &mut Tracer<W>) -> io::Result<()> {
        tracer.change_bus(id, self.iter().rev().map(|b| bool_to_vcd(*b)))
    }
}

impl<const N: usize> Traceable for Idx<N> {
    fn add_vars(&self, vars: &mut TraceVars) {
        vars.add_ty(TraceTy::Bus(Self::BITS as u32));
    }

    fn trace<W: Write>(&self, id: &mut IdCode, tracer: &mut Tracer<W>) -> io::Result<()> {
        let val = self.val();
        tracer.change_bus(
            id,
            (0..Self::BITS).rev().map(|n| bool_to_vcd((val >> n) & 1 == 1)),
        )
    }
}

impl Traceable for Unsigned {
    fn add_vars(&self, vars: &mut TraceVars) {
        vars.add_ty(TraceTy::Bus(self.width() as u32));
    }

    fn trace<W: Write>(&self, id: &mut IdCode, tracer: &mut Tracer<W>) -> io::Result<()> {
        tracer.change_bus(id, self.bits_msb_first().map(bool_to_vcd))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TraceTy {
    Wire,
    Bus(u32),
}

impl TraceTy {
    fn as_pair(&self) -> (u32, VarType) {
        match self {
            Self::Wire => (1, VarType::Wire),
            Self::Bus(w) => (*w, VarType::Integer),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    PushSym(&'static str),
    PushIdx(usize),
    Ty(TraceTy),
    Pop,
}

#[derive(Debug, Default)]
pub struct TraceVars {
    commands: Vec<Command>,
}

impl TraceVars {
    pub fn add_var<T: Traceable>(mut self, sym: &'static str, var: &T) -> Self {
        self.field(sym, var);
        self
    }

    /// Registers a named member of a compound value.
    pub fn field<T: Traceable>(&mut self, sym: &'static str, var: &T) {
        self.push_sym(sym);
        var.add_vars(self);
        self.pop();
    }

    #[inline]
    pub fn push_sym(&mut self, sym: &'static str) {
        self.commands.push(Command::PushSym(sym));
    }

    #[inline]
    pub fn push_idx(&mut self, idx: usize) {
        self.commands.push(Command::PushIdx(idx));
    }

    #[inline]
    pub fn add_ty(&mut self, ty: TraceTy) {
        self.commands.push(Command::Ty(ty));
    }

    #[inline]
    pub fn pop(&mut self) {
        self.commands.push(Command::Pop);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Timescale {
    S(u32),
    MS(u32),
    US(u32),
    NS(u32),
    PS(u32),
    FS(u32),
}

impl Timescale {
    fn into_pair(self) -> (u32, TimescaleUnit) {
        match self {
            Self::S(ts) => (ts, TimescaleUnit::S),
            Self::MS(ts) => (ts, TimescaleUnit::MS),
            Self::US(ts) => (ts, TimescaleUnit::US),
            Self::NS(ts) => (ts, TimescaleUnit::NS),
            Self::PS(ts) => (ts, TimescaleUnit::PS),
            Self::FS(ts) => (ts, TimescaleUnit::FS),
        }
    }
}

impl Default for Timescale {
    fn default() -> Self {
        Self::PS(1)
    }
}

#[derive(Debug)]
struct VarName {
    stack: Vec<usize>,
    inner: String,
}

impl Default for VarName {
    fn default() -> Self {
        Self {
            stack: Vec::with_capacity(8),
            inner: String::with_capacity(32),
        }
    }
}

impl VarName {
    #[inline]
    fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    #[inline]
    fn to_str(&self) -> String {
        self.inner.clone()
    }

    fn push_sym(&mut self, sym: &'static str) {
        self.stack.push(self.inner.len());
        if !self.inner.is_empty() {
            self.inner.push('$');
        }
        self.inner.push_str(sym);
    }

    fn push_idx(&mut self, idx: usize) {
        self.stack.push(self.inner.len());
        if !self.inner.is_empty() {
            self.inner.push('$');
        }
        write!(&mut self.inner, "{idx}").unwrap();
    }

    fn pop(&mut self) {
        if let Some(idx) = self.stack.pop() {
            self.inner.truncate(idx);
        }
    }
}

#[derive_where(Debug)]
pub struct Tracer<W: Write> {
    syms: FxHashMap<String, IdCode>,
    #[derive_where(skip)]
    vcd: VcdWriter<W>,
}

impl<W: Write> Tracer<W> {
    pub fn new(
        writer: W,
        vars: TraceVars,
        mod_name: &'static str,
        timescale: Option<Timescale>,
    ) -> io::Result<Self> {
        let mut vcd = VcdWriter::new(writer);
        let (ts, unit) = timescale.unwrap_or_default().into_pair();
        vcd.timescale(ts, unit)?;
        vcd.add_module(mod_name)?;

        let mut syms: FxHashMap<String, IdCode> = Default::default();
        let mut var_name = VarName::default();
        let mut sym = None;
        let mut code = None;
        for command in vars.commands {
            match command {
                Command::PushSym(sym_) => {
                    sym.get_or_insert(sym_);
                    var_name.push_sym(sym_);
                }
                Command::PushIdx(idx) => {
                    var_name.push_idx(idx);
                }
                Command::Ty(ty) => {
                    let (width, var_ty) = ty.as_pair();
                    let id = vcd.add_var(var_ty, width, var_name.as_str(), None)?;
                    code.get_or_insert(id);
                }
                Command::Pop => {
                    if Some(var_name.as_str()) == sym {
                        if let Some(start_code) = code {
                            syms.insert(var_name.to_str(), start_code);
                        }

                        sym = None;
                        code = None;
                    }
                    var_name.pop();
                }
            }
        }
        vcd.upscope()?;
        vcd.enddefinitions()?;

        Ok(Self { syms, vcd })
    }

    pub fn dump_time(&mut self, time: u64) -> io::Result<()> {
        self.vcd.timestamp(time)
    }

    pub fn trace<T: Traceable>(&mut self, sym: &'static str, value: &T) -> io::Result<()> {
        if let Some(id) = self.syms.get(sym) {
            let mut id = *id;
            value.trace(&mut id, self)?;
        }

        Ok(())
    }

    #[inline]
    pub fn change_wire(&mut self, id: &mut IdCode, value: TraceValue) -> io::Result<()> {
        self.vcd.change_scalar(*id, value)?;
        *id = id.next();

        Ok(())
    }

    #[inline]
    pub fn change_bus(
        &mut self,
        id: &mut IdCode,
        values: impl IntoIterator<Item = TraceValue>,
    ) -> io::Result<()> {
        self.vcd.change_vector(*id, values)?;
        *id = id.next();

        Ok(())
    }

    #[inline]
    pub fn flush(&mut self) -> io::Result<()> {
        self.vcd.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        en: bool,
        cnt: Idx<6>,
    }

    impl Traceable for Pair {
        fn add_vars(&self, vars: &mut TraceVars) {
            vars.field("en", &self.en);
            vars.field("cnt", &self.cnt);
        }

        fn trace<W: Write>(&self, id: &mut IdCode, tracer: &mut Tracer<W>) -> io::Result<()> {
            self.en.trace(id, tracer)?;
            self.cnt.trace(id, tracer)
        }
    }

    #[test]
    fn writes_header_and_changes() {
        let pair = Pair {
            en: true,
            cnt: Idx::new(5),
        };
        let mut out = Vec::new();
        {
            let vars = TraceVars::default()
                .add_var("clk", &false)
                .add_var("top", &pair);
            let mut tracer = Tracer::new(&mut out, vars, "test", None).unwrap();
            tracer.dump_time(0).unwrap();
            tracer.trace("clk", &true).unwrap();
            tracer.trace("top", &pair).unwrap();
            tracer.trace("missing", &true).unwrap();
            tracer.flush().unwrap();
        }

        let vcd = String::from_utf8(out).unwrap();
        assert!(vcd.contains("$timescale 1 ps $end"), "{vcd}");
        assert!(vcd.contains("$scope module test $end"), "{vcd}");
        assert!(vcd.contains(" clk $end"), "{vcd}");
        assert!(vcd.contains(" top$en $end"), "{vcd}");
        assert!(vcd.contains(" top$cnt $end"), "{vcd}");
        assert!(vcd.contains("#0"), "{vcd}");
        assert!(vcd.contains("b101 "), "{vcd}");
    }

    #[test]
    fn var_names() {
        let mut name = VarName::default();
        name.push_sym("frames");
        name.push_idx(1);
        assert_eq!(name.as_str(), "frames$1");
        name.pop();
        assert_eq!(name.as_str(), "frames");
    }
}
