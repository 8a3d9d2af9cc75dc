use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dnp3_core::constants::PrimaryFunction;
use dnp3_core::crc;
use dnp3_core::header::control::{ControlField, Direction, FrameType};
use dnp3_core::header::view::LinkHeader;
use dnp3_core::{Frame, StationAddress};

fn build_frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = Frame::assemble(payload).unwrap();
    let mut header = LinkHeader::for_send(frame.header_block_mut()).unwrap();
    header.set_len((5 + payload.len()) as u8).unwrap();
    header.set_control(&ControlField {
        direction: Direction::FromMaster,
        frame_type: FrameType::Primary {
            fcb: false,
            function: PrimaryFunction::UnconfirmedUserData,
        },
    });
    header
        .set_addresses(StationAddress::new(1024), StationAddress::new(1))
        .unwrap();
    header.finalize();
    frame.to_bytes()
}

fn bench_crc(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc");

    let content_8 = vec![0xABu8; 8];
    let content_16 = vec![0xABu8; 16];

    for (label, content) in [("8B", &content_8), ("16B", &content_16)] {
        group.throughput(Throughput::Bytes(content.len() as u64));

        let mut checked = content.clone();
        let crc = crc::calculate(content).unwrap();
        checked.extend_from_slice(&crc.to_le_bytes());

        group.bench_with_input(BenchmarkId::new("calculate", label), content, |b, d| {
            b.iter(|| crc::calculate(d).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("check", label), &checked, |b, d| {
            b.iter(|| crc::check(d).unwrap());
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let payload_0: Vec<u8> = Vec::new();
    let payload_16 = vec![0xABu8; 16];
    let payload_250 = vec![0xABu8; 250];

    for (label, payload) in [("0B", &payload_0), ("16B", &payload_16), ("250B", &payload_250)]
    {
        let raw = build_frame(payload);
        group.throughput(Throughput::Bytes(raw.len() as u64));

        group.bench_with_input(BenchmarkId::new("assemble", label), payload, |b, p| {
            b.iter(|| build_frame(p));
        });
        group.bench_with_input(BenchmarkId::new("parse", label), &raw, |b, r| {
            b.iter(|| Frame::from_bytes(r).unwrap());
        });

        let frame = Frame::from_bytes(&raw).unwrap();
        group.bench_with_input(BenchmarkId::new("validate", label), &frame, |b, f| {
            b.iter(|| f.validate().unwrap());
        });
        group.bench_with_input(BenchmarkId::new("serialize", label), &frame, |b, f| {
            b.iter(|| f.to_bytes());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_crc, bench_frame);
criterion_main!(benches);
