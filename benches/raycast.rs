use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_fps::core::{cast_ray, ray_angle, Map, World};
use tui_fps::term::{FrameBuffer, FrameView, Hud};
use tui_fps::types::{Intents, Pose, SCREEN_WIDTH};

fn bench_cast_all_columns(c: &mut Criterion) {
    let map = Map::level().unwrap();
    let pose = Pose::start();

    c.bench_function("cast_120_rays", |b| {
        b.iter(|| {
            for x in 0..SCREEN_WIDTH {
                let angle = ray_angle(pose.angle, x, SCREEN_WIDTH);
                black_box(cast_ray(&map, black_box(pose.x), black_box(pose.y), angle));
            }
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let view = FrameView::default();
    let world = World::new(Map::level().unwrap(), Pose::start());
    let mut fb = FrameBuffer::new(view.width(), view.height());

    c.bench_function("render_frame_120x40", |b| {
        b.iter(|| {
            view.render_into(black_box(&world), Hud { fps: 60.0 }, &mut fb);
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    let mut world = World::new(Map::level().unwrap(), Pose::start());
    let intents = Intents {
        forward: true,
        turn_left: true,
        ..Intents::NONE
    };

    c.bench_function("world_advance", |b| {
        b.iter(|| {
            world.advance(black_box(0.016), intents);
        })
    });
}

criterion_group!(benches, bench_cast_all_columns, bench_render_frame, bench_advance);
criterion_main!(benches);
