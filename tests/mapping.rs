use mips_rs::decoder::classify;
use mips_rs::instructions::{lookup_funct, lookup_opcode, operation_name, Op, OperandForm, I_TABLE, R_TABLE};
use mips_rs::registers::{register_name, register_name_hex, REGISTER_NAMES};
use mips_rs::{DecodeError, InstructionKind};

#[test]
fn register_table_is_complete() {
    assert_eq!(register_name(0).unwrap(), "$zero");
    assert_eq!(register_name(8).unwrap(), "$t0");
    assert_eq!(register_name(0x18).unwrap(), "$t8");
    assert_eq!(register_name(31).unwrap(), "$ra");
    assert_eq!(register_name_hex("1D").unwrap(), "$sp");
    assert_eq!(register_name_hex("0a").unwrap(), "$t2");
    assert_eq!(REGISTER_NAMES.len(), 32);
}

#[test]
fn register_code_20_is_unknown() {
    assert_eq!(register_name_hex("20"), Err(DecodeError::UnknownRegister { code: 0x20 }));
    assert_eq!(register_name(32), Err(DecodeError::UnknownRegister { code: 32 }));
    assert!(matches!(register_name_hex("2"), Err(DecodeError::MalformedInput { .. })));
}

#[test]
fn classify_opcodes() {
    assert_eq!(classify(0x00).unwrap(), InstructionKind::R);
    assert_eq!(classify(0x04).unwrap(), InstructionKind::I);
    assert_eq!(classify(0x3F).unwrap(), InstructionKind::I);
    for opcode in 1..=3 {
        assert_eq!(classify(opcode), Err(DecodeError::UnsupportedOpcode { opcode }));
    }
}

#[test]
fn tables_are_closed() {
    assert_eq!(R_TABLE.len(), 11);
    assert_eq!(I_TABLE.len(), 17);
    assert!(matches!(
        lookup_funct(0x3F),
        Err(DecodeError::UnknownMnemonic { kind: InstructionKind::R, code: 0x3F })
    ));
    assert!(matches!(
        lookup_opcode(0x06),
        Err(DecodeError::UnknownMnemonic { kind: InstructionKind::I, code: 0x06 })
    ));
}

#[test]
fn funct_and_opcode_lookup() {
    let d = lookup_funct(0x2A).unwrap();
    assert_eq!((d.op, d.mnemonic, d.form), (Op::Slt, "slt", OperandForm::RegReg));
    assert_eq!(lookup_funct(0x02).unwrap().form, OperandForm::Shift);
    assert_eq!(lookup_opcode(0x0F).unwrap().form, OperandForm::Upper);
    assert_eq!(lookup_opcode(0x38).unwrap().mnemonic, "sc");
    assert!(lookup_opcode(0x05).unwrap().op.is_branch());
}

#[test]
fn operation_name_uses_funct_only_for_r_format() {
    assert_eq!(operation_name(0x00, Some(0x20)).unwrap(), "add");
    assert_eq!(operation_name(0x23, None).unwrap(), "lw");
    // funct is ignored for I-format
    assert_eq!(operation_name(0x2B, Some(0x20)).unwrap(), "sw");
    assert!(operation_name(0x00, None).is_err());
    assert!(matches!(operation_name(0x02, Some(0x20)), Err(DecodeError::UnsupportedOpcode { opcode: 2 })));
}
