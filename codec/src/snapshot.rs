//! Full game-state decoding and encoding.

use bytestream::{ByteReader, ByteWriter};
use tracing::{debug, trace, warn};
use wire::{decode_packet, encode_header, WireLayout, WirePacket, HEADER_SIZE};

use crate::angle::{decode_angle, encode_angle};
use crate::error::{CodecResult, CountKind, DecodeError, EncodeError, EncodeResult};
use crate::limits::CodecLimits;
use crate::types::{Food, GameState, Snake, SnakeId, Vector2};

/// Decodes a complete datagram, header included.
///
/// The header and packet size are re-validated even when the caller has
/// already run [`wire::assert_game_data`].
pub fn decode_game_state(
    bytes: &[u8],
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> CodecResult<GameState> {
    let packet = decode_packet(bytes, wire_limits)?;
    decode_game_state_from_packet(&packet, limits)
}

/// Decodes a game state from a parsed wire packet.
pub fn decode_game_state_from_packet(
    packet: &WirePacket<'_>,
    limits: &CodecLimits,
) -> CodecResult<GameState> {
    decode_game_state_with_layout(
        packet.bytes,
        packet.payload_offset(),
        WireLayout::Aligned,
        limits,
    )
}

/// Decodes the body that starts at `offset`, normally just past the header.
///
/// The header is not looked at; the caller is responsible for checking it
/// with [`wire::assert_game_data`] first. Prefer [`decode_game_state`] for
/// untrusted datagrams, which re-validates the header and packet size.
/// Error offsets are absolute positions in `bytes`.
pub fn decode_game_state_at(
    bytes: &[u8],
    offset: usize,
    limits: &CodecLimits,
) -> CodecResult<GameState> {
    decode_game_state_with_layout(bytes, offset, WireLayout::Aligned, limits)
}

/// Decodes the body at `offset` using an explicit record layout.
///
/// Use [`WireLayout::Packed`] only for legacy senders; the bytes carry
/// no marker that distinguishes the two layouts.
pub fn decode_game_state_with_layout(
    bytes: &[u8],
    offset: usize,
    layout: WireLayout,
    limits: &CodecLimits,
) -> CodecResult<GameState> {
    let mut reader = ByteReader::at(bytes, offset);
    let state = decode_body(&mut reader, layout, limits)?;
    debug!(
        layout = layout.name(),
        bytes = bytes.len(),
        players = state.players.len(),
        segments = state.segment_count(),
        foods = state.foods.len(),
        "decoded game state"
    );
    Ok(state)
}

fn decode_body(
    reader: &mut ByteReader<'_>,
    layout: WireLayout,
    limits: &CodecLimits,
) -> CodecResult<GameState> {
    let player_count = read_count(reader, layout)?;
    check_count(
        reader,
        CountKind::Players,
        player_count,
        layout.min_snake_record(),
        limits.max_players,
        limits,
    )?;

    let mut players: Vec<Snake> = Vec::with_capacity(player_count);
    for index in 0..player_count {
        let snake = decode_snake(reader, index, layout, limits)?;
        if players.iter().any(|other| other.id == snake.id) {
            warn!(index, id = %snake.id, "duplicate snake id; lookups return the first");
        }
        players.push(snake);
    }

    let food_count = read_count(reader, layout)?;
    check_count(
        reader,
        CountKind::Foods,
        food_count,
        layout.food_record(),
        limits.max_foods,
        limits,
    )?;

    let mut foods = Vec::with_capacity(food_count);
    for _ in 0..food_count {
        let position = read_vector(reader)?;
        let size = reader.read_u8()?;
        reader.skip(layout.food_pad())?;
        foods.push(Food { position, size });
    }

    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            offset: reader.position(),
            remaining: reader.remaining(),
        });
    }

    Ok(GameState { players, foods })
}

fn decode_snake(
    reader: &mut ByteReader<'_>,
    index: usize,
    layout: WireLayout,
    limits: &CodecLimits,
) -> CodecResult<Snake> {
    let offset = reader.position();
    let id_len = usize::from(reader.read_u8()?);
    let id = SnakeId::from(reader.read_bytes(id_len)?);
    reader.skip_padding(1 + id_len, layout.id_alignment())?;
    if id.is_empty() {
        warn!(index, offset, "snake with empty id");
        return Err(DecodeError::EmptySnakeId { index, offset });
    }

    let position = read_vector(reader)?;
    let raw_angle = reader.read_u16_be()?;
    let boosting = reader.read_u8()? != 0;
    reader.skip(layout.boost_pad())?;
    let length = reader.read_f32_be()?;

    let segment_count = read_count(reader, layout)?;
    check_count(
        reader,
        CountKind::Segments,
        segment_count,
        layout.segment_record(),
        limits.max_segments_per_snake,
        limits,
    )?;
    let mut segments = Vec::with_capacity(segment_count);
    for _ in 0..segment_count {
        segments.push(read_vector(reader)?);
    }

    trace!(id = %id, raw_angle, boosting, segment_count, "decoded snake");

    Ok(Snake {
        id,
        position,
        angle: decode_angle(raw_angle),
        boosting,
        length,
        segments,
    })
}

fn read_vector(reader: &mut ByteReader<'_>) -> CodecResult<Vector2> {
    let x = reader.read_f32_be()?;
    let y = reader.read_f32_be()?;
    Ok(Vector2 { x, y })
}

/// Reads a `u16` count and the pad that follows it.
fn read_count(reader: &mut ByteReader<'_>, layout: WireLayout) -> CodecResult<usize> {
    let count = usize::from(reader.read_u16_be()?);
    reader.skip(layout.count_pad())?;
    Ok(count)
}

/// Rejects a count before anything is allocated for it.
///
/// The limit check runs first so that a hostile count reports
/// `CountOverflow` even when the buffer is also short.
fn check_count(
    reader: &ByteReader<'_>,
    kind: CountKind,
    count: usize,
    record_size: usize,
    limit: usize,
    limits: &CodecLimits,
) -> CodecResult<()> {
    let limit = limits.effective_limit(limit, record_size);
    if count > limit {
        return Err(DecodeError::CountOverflow { kind, count, limit });
    }
    reader.ensure(count.saturating_mul(record_size))?;
    Ok(())
}

/// Encodes a game state into a complete packet, header included.
///
/// Counts are bounded by the same limits the decoder applies, so any packet
/// produced here decodes under `limits`. Angles are quantized with
/// [`encode_angle`].
pub fn encode_game_state(
    state: &GameState,
    layout: WireLayout,
    limits: &CodecLimits,
) -> EncodeResult<Vec<u8>> {
    ensure_encodable(
        CountKind::Players,
        state.players.len(),
        layout.min_snake_record(),
        limits.max_players,
        limits,
    )?;
    ensure_encodable(
        CountKind::Foods,
        state.foods.len(),
        layout.food_record(),
        limits.max_foods,
        limits,
    )?;

    let body_len = encoded_body_len(state, layout);
    let mut out = Vec::with_capacity(HEADER_SIZE + body_len);
    encode_header(&mut out);

    let mut writer = ByteWriter::with_capacity(body_len);
    write_count(&mut writer, state.players.len(), layout);
    for (index, snake) in state.players.iter().enumerate() {
        encode_snake(&mut writer, index, snake, layout, limits)?;
    }

    write_count(&mut writer, state.foods.len(), layout);
    for food in &state.foods {
        write_vector(&mut writer, food.position);
        writer.write_u8(food.size);
        writer.write_padding(layout.food_pad());
    }

    writer.finish_into(&mut out);
    Ok(out)
}

fn encode_snake(
    writer: &mut ByteWriter,
    index: usize,
    snake: &Snake,
    layout: WireLayout,
    limits: &CodecLimits,
) -> EncodeResult<()> {
    let id = snake.id.as_bytes();
    if id.is_empty() {
        return Err(EncodeError::EmptySnakeId { index });
    }
    if writer.write_u8_prefixed(id).is_err() {
        return Err(EncodeError::IdTooLong {
            index,
            len: id.len(),
        });
    }
    writer.write_padding(layout.id_pad(id.len()));

    write_vector(writer, snake.position);
    writer.write_u16_be(encode_angle(snake.angle));
    writer.write_u8(u8::from(snake.boosting));
    writer.write_padding(layout.boost_pad());
    writer.write_f32_be(snake.length);

    ensure_encodable(
        CountKind::Segments,
        snake.segments.len(),
        layout.segment_record(),
        limits.max_segments_per_snake,
        limits,
    )?;
    write_count(writer, snake.segments.len(), layout);
    for segment in &snake.segments {
        write_vector(writer, *segment);
    }
    Ok(())
}

fn ensure_encodable(
    kind: CountKind,
    count: usize,
    record_size: usize,
    limit: usize,
    limits: &CodecLimits,
) -> EncodeResult<()> {
    let limit = limits.effective_limit(limit.min(usize::from(u16::MAX)), record_size);
    if count > limit {
        return Err(EncodeError::CountOverflow { kind, count, limit });
    }
    Ok(())
}

/// Writes a count that [`ensure_encodable`] has already bounded to `u16`.
fn write_count(writer: &mut ByteWriter, count: usize, layout: WireLayout) {
    writer.write_u16_be(u16::try_from(count).unwrap_or(u16::MAX));
    writer.write_padding(layout.count_pad());
}

fn write_vector(writer: &mut ByteWriter, v: Vector2) {
    writer.write_f32_be(v.x);
    writer.write_f32_be(v.y);
}

/// Exact body size of `state` under `layout`.
fn encoded_body_len(state: &GameState, layout: WireLayout) -> usize {
    let snakes: usize = state
        .players
        .iter()
        .map(|snake| {
            let id_len = snake.id.len();
            1 + id_len
                + layout.id_pad(id_len)
                + layout.snake_fixed()
                + snake.segments.len() * layout.segment_record()
        })
        .sum();
    2 * layout.count_field() + snakes + state.foods.len() * layout.food_record()
}
